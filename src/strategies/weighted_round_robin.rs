use crate::{
    server::{Server, ServerConfig},
    strategy::RotationStrategy,
    utils,
};

/// Interleaved weighted rotation (classic nginx scheme).
///
/// A single rotation-wide `current_weight` threshold sweeps down from the
/// maximum weight in steps of the weight GCD; on each pass, servers whose
/// weight reaches the threshold get a turn. Aggregate distribution matches
/// the weight shares exactly, but selections are bursty: a heavy server is
/// handed several turns in a row before lighter ones come up. That is the
/// documented behavior of this strategy, not something to smooth over here.
pub struct WeightedRoundRobin {
    servers: Vec<Server>,
    cursor: usize,
    current_weight: isize,
    max_weight: isize,
    gcd_weight: isize,
}

impl WeightedRoundRobin {
    pub fn new(configs: Vec<ServerConfig>) -> Self {
        let mut strategy = Self {
            servers: Vec::new(),
            cursor: 0,
            current_weight: 0,
            max_weight: 0,
            gcd_weight: 0,
        };
        strategy.set_servers(configs);
        strategy
    }

    /// Replaces the pool, restarting the sweep. Weights are static within a
    /// pool; changing one means rebuilding through here.
    pub fn set_servers(&mut self, configs: Vec<ServerConfig>) {
        self.servers = configs.into_iter().map(Server::new).collect();
        self.cursor = 0;
        self.current_weight = 0;

        let weights = self.servers.iter().map(Server::weight);
        self.max_weight = weights.clone().max().unwrap_or(0).max(1) as isize;
        self.gcd_weight = utils::math::gcd_all(weights) as isize;
    }

    pub fn select(&mut self) -> Option<&Server> {
        // gcd of zero means every weight is zero: nothing has capacity, and
        // the sweep below would never find a candidate
        if self.servers.is_empty() || self.gcd_weight == 0 {
            return None;
        }

        loop {
            if self.cursor == 0 {
                self.current_weight -= self.gcd_weight;
                if self.current_weight <= 0 {
                    self.current_weight = self.max_weight;
                }
            }

            let index = self.cursor;
            self.cursor = (self.cursor + 1) % self.servers.len();

            if self.servers[index].weight() as isize >= self.current_weight {
                return self.servers.get(index);
            }
        }
    }
}

impl RotationStrategy for WeightedRoundRobin {
    fn select(&mut self) -> Option<&Server> {
        WeightedRoundRobin::select(self)
    }

    fn servers(&self) -> &[Server] {
        &self.servers
    }
}
