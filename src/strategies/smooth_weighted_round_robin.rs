use crate::{
    server::{Server, ServerConfig},
    strategy::RotationStrategy,
};

/// Smooth weighted rotation (nginx smooth variant).
///
/// Every call adds each server's effective weight to its own accumulator and
/// picks the largest one, then charges the winner the pool's total effective
/// weight. The charge is what spreads a heavy server's turns out across the
/// cycle instead of handing them over back to back.
///
/// This is the only strategy that honors `adjust_effective_weight`, so it is
/// the one to pair with an external health checker: degrade a flaky server
/// toward 1 on failures, step it back up toward its weight on recovery.
pub struct SmoothWeightedRoundRobin {
    servers: Vec<Server>,
}

impl SmoothWeightedRoundRobin {
    pub fn new(configs: Vec<ServerConfig>) -> Self {
        let mut strategy = Self {
            servers: Vec::new(),
        };
        strategy.set_servers(configs);
        strategy
    }

    /// Replaces the pool; accumulators restart from zero and effective
    /// weights from the configured weights.
    pub fn set_servers(&mut self, configs: Vec<ServerConfig>) {
        self.servers = configs.into_iter().map(Server::new).collect();
    }

    pub fn select(&mut self) -> Option<&Server> {
        let mut total = 0;
        let mut best: Option<usize> = None;
        let mut best_weight = 0;

        for (index, server) in self.servers.iter_mut().enumerate() {
            server.current_weight += server.effective_weight;
            total += server.effective_weight;

            // strict comparison: on a tie the earlier server keeps the win
            if best.is_none() || server.current_weight > best_weight {
                best = Some(index);
                best_weight = server.current_weight;
            }
        }

        let best = best?;
        self.servers[best].current_weight -= total;

        self.servers.get(best)
    }

    /// Shifts a server's effective weight by `step`, clamped to
    /// `1..=weight`. Unknown hosts are ignored.
    pub fn adjust_effective_weight(&mut self, host: &str, step: isize) {
        let Some(server) = self.servers.iter_mut().find(|s| s.host() == host) else {
            return;
        };

        let max = (server.weight() as isize).max(1);
        server.effective_weight = (server.effective_weight + step).clamp(1, max);
    }
}

impl RotationStrategy for SmoothWeightedRoundRobin {
    fn select(&mut self) -> Option<&Server> {
        SmoothWeightedRoundRobin::select(self)
    }

    fn servers(&self) -> &[Server] {
        &self.servers
    }

    fn adjust_effective_weight(&mut self, host: &str, step: isize) {
        SmoothWeightedRoundRobin::adjust_effective_weight(self, host, step)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn configs(weights: &[(&str, usize)]) -> Vec<ServerConfig> {
        weights
            .iter()
            .map(|&(host, weight)| ServerConfig {
                host: host.to_owned(),
                weight,
            })
            .collect()
    }

    fn take(strategy: &mut SmoothWeightedRoundRobin, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| strategy.select().unwrap().host().to_owned())
            .collect()
    }

    #[test]
    fn test_exact_first_twenty() {
        let mut strategy =
            SmoothWeightedRoundRobin::new(configs(&[("a", 5), ("b", 1), ("c", 1)]));

        let picks = take(&mut strategy, 20);

        // same weights as the classic sweep, but the heavy server's turns
        // are interleaved instead of consecutive
        let expected = [
            "a", "a", "b", "a", "c", "a", "a", //
            "a", "a", "b", "a", "c", "a", "a", //
            "a", "a", "b", "a", "c", "a",
        ];
        assert_eq!(picks, expected);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for host in picks {
            *counts.entry(host).or_default() += 1;
        }
        assert_eq!(counts["a"], 14);
        assert_eq!(counts["b"], 3);
        assert_eq!(counts["c"], 3);
    }

    #[test]
    fn test_tie_goes_to_the_first_server() {
        let mut strategy =
            SmoothWeightedRoundRobin::new(configs(&[("a", 1), ("b", 1), ("c", 1)]));

        assert_eq!(take(&mut strategy, 6), ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_degraded_server_levels_out() {
        let mut strategy =
            SmoothWeightedRoundRobin::new(configs(&[("a", 5), ("b", 1), ("c", 1)]));

        // a health checker hammering the heavy server down to the floor
        strategy.adjust_effective_weight("a", -100);

        assert_eq!(take(&mut strategy, 6), ["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_effective_weight_clamp() {
        let mut strategy = SmoothWeightedRoundRobin::new(configs(&[("a", 5)]));

        strategy.adjust_effective_weight("a", -100);
        assert_eq!(strategy.servers()[0].effective_weight, 1);

        strategy.adjust_effective_weight("a", -1);
        assert_eq!(strategy.servers()[0].effective_weight, 1);

        strategy.adjust_effective_weight("a", 100);
        assert_eq!(strategy.servers()[0].effective_weight, 5);

        strategy.adjust_effective_weight("a", 1);
        assert_eq!(strategy.servers()[0].effective_weight, 5);

        strategy.adjust_effective_weight("a", -2);
        strategy.adjust_effective_weight("a", 1);
        assert_eq!(strategy.servers()[0].effective_weight, 4);
    }

    #[test]
    fn test_adjust_unknown_host_is_ignored() {
        let mut strategy = SmoothWeightedRoundRobin::new(configs(&[("a", 5)]));

        strategy.adjust_effective_weight("ghost", -3);
        assert_eq!(strategy.servers()[0].effective_weight, 5);
    }

    #[test]
    fn test_one() {
        let mut strategy = SmoothWeightedRoundRobin::new(configs(&[("a", 2)]));
        assert_eq!(strategy.select().map(|s| s.host().to_owned()), Some("a".to_owned()));
        assert_eq!(strategy.select().map(|s| s.host().to_owned()), Some("a".to_owned()));
    }

    #[test]
    fn test_empty() {
        let mut strategy = SmoothWeightedRoundRobin::new(Vec::new());
        assert!(strategy.select().is_none());
    }
}
