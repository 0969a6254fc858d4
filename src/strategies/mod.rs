pub mod factory;
pub mod round_robin;
pub mod smooth_weighted_round_robin;
pub mod weighted_round_robin;

pub use round_robin::RoundRobin;
pub use smooth_weighted_round_robin::SmoothWeightedRoundRobin;
pub use weighted_round_robin::WeightedRoundRobin;
