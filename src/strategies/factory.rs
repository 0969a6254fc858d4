use serde::Deserialize;

use crate::{
    server::ServerConfig,
    strategies::{RoundRobin, SmoothWeightedRoundRobin, WeightedRoundRobin},
    strategy::RotationStrategy,
};

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyType {
    RoundRobin,
    WeightedRoundRobin,
    SmoothWeightedRoundRobin,
}

pub struct StrategyFactory;

impl StrategyFactory {
    pub fn make(
        strategy: StrategyType,
        servers: Vec<ServerConfig>,
    ) -> Box<dyn RotationStrategy + Send> {
        match strategy {
            StrategyType::RoundRobin => Box::new(RoundRobin::new(servers)),
            StrategyType::WeightedRoundRobin => Box::new(WeightedRoundRobin::new(servers)),
            StrategyType::SmoothWeightedRoundRobin => {
                Box::new(SmoothWeightedRoundRobin::new(servers))
            }
        }
    }
}
