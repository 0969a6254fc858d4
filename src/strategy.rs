use crate::server::Server;

/// The "pick the next peer" contract shared by the rotation strategies.
///
/// Selection mutates scheduling state, so it takes `&mut self`; callers that
/// share one strategy across threads must serialize access themselves.
pub trait RotationStrategy {
    /// Returns the next backend, or `None` if the pool is empty.
    fn select(&mut self) -> Option<&Server>;

    /// Current membership, in insertion order.
    fn servers(&self) -> &[Server];

    /// Reflects an external health signal by shifting a node's effective
    /// weight. Unknown hosts are ignored: health probes may race topology
    /// changes. Only the smooth-weighted strategy reacts to this.
    fn adjust_effective_weight(&mut self, host: &str, step: isize) {
        let _ = (host, step);
    }

    fn is_empty(&self) -> bool {
        self.servers().is_empty()
    }
}
