use crate::{
    server::{Server, ServerConfig},
    strategy::RotationStrategy,
};

/// Plain rotation: every server gets exactly one turn per cycle, weights are
/// ignored.
pub struct RoundRobin {
    servers: Vec<Server>,
    cursor: usize,
}

impl RoundRobin {
    pub fn new(configs: Vec<ServerConfig>) -> Self {
        let mut strategy = Self {
            servers: Vec::new(),
            cursor: 0,
        };
        strategy.set_servers(configs);
        strategy
    }

    /// Replaces the pool and restarts the rotation from the first server.
    pub fn set_servers(&mut self, configs: Vec<ServerConfig>) {
        self.servers = configs.into_iter().map(Server::new).collect();
        self.cursor = 0;
    }

    pub fn select(&mut self) -> Option<&Server> {
        if self.servers.is_empty() {
            return None;
        }

        let index = self.cursor;
        self.cursor = (self.cursor + 1) % self.servers.len();

        self.servers.get(index)
    }
}

impl RotationStrategy for RoundRobin {
    fn select(&mut self) -> Option<&Server> {
        RoundRobin::select(self)
    }

    fn servers(&self) -> &[Server] {
        &self.servers
    }
}
