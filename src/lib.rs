//! Peer-selection engine for load balancing.
//!
//! Two independent selector families share one node record and one error
//! taxonomy:
//!
//! - [`HashRing`]: virtual-node consistent hashing; maps a key to a backend
//!   so that node churn only reassigns a bounded fraction of keys.
//! - [`RotationStrategy`] implementations: stateful round-robin over a fixed
//!   server pool, plain or weighted, for anonymous request dispatch.
//!
//! Everything here is a synchronous in-memory state machine. There is no
//! internal locking: a hosting dispatcher that shares one instance across
//! threads must serialize access itself.

pub mod error;
pub mod ring;
pub mod server;
pub mod strategies;
pub mod strategy;
mod utils;

pub use error::{Error, Result};
pub use ring::{HashRing, RingSnapshot};
pub use server::{Server, ServerConfig};
pub use strategies::factory::{StrategyFactory, StrategyType};
pub use strategies::{RoundRobin, SmoothWeightedRoundRobin, WeightedRoundRobin};
pub use strategy::RotationStrategy;
