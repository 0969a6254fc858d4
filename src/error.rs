use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("replica count must be greater than zero")]
    InvalidReplicas,

    #[error("node identifier cannot be empty")]
    EmptyNodeId,

    #[error("node '{0}' is already registered")]
    DuplicateNode(String),

    #[error("lookup on an empty ring")]
    EmptyRing,
}
