use serde::Deserialize;

/// Static backend description as it comes from configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub weight: usize,
}

/// A backend as the rotation strategies track it.
///
/// `weight` in the config is the static capacity. `effective_weight` is the
/// currently usable capacity, kept in `1..=weight` by health-signal
/// adjustments. `current_weight` is a scheduling accumulator, not a capacity
/// measure; it may go negative between selections.
#[derive(Clone, Debug)]
pub struct Server {
    pub config: ServerConfig,
    pub effective_weight: isize,
    pub current_weight: isize,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        let effective_weight = config.weight as isize;
        Self {
            config,
            effective_weight,
            current_weight: 0,
        }
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn weight(&self) -> usize {
        self.config.weight
    }
}

impl From<ServerConfig> for Server {
    fn from(config: ServerConfig) -> Self {
        Server::new(config)
    }
}
