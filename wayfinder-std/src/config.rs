//! Navigator configuration.

/// Default bound on redirect hops within one synchronous chain.
pub const DEFAULT_MAX_REDIRECT_DEPTH: usize = 16;

/// Tunables for a [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Maximum number of hops one `navigate` call may resolve before failing
    /// with `RedirectDepthExceeded`. Asynchronous re-entry starts a new chain.
    pub max_redirect_depth: usize,
    /// Reject chains that revisit a route with `RedirectCycleDetected`.
    pub detect_cycles: bool,
}

impl NavigatorConfig {
    /// Default configuration.
    pub const fn new() -> Self {
        Self {
            max_redirect_depth: DEFAULT_MAX_REDIRECT_DEPTH,
            detect_cycles: true,
        }
    }

    /// Set the maximum redirect depth.
    pub const fn with_max_redirect_depth(mut self, depth: usize) -> Self {
        self.max_redirect_depth = depth;
        self
    }

    /// Enable or disable cycle detection. With it disabled a cycle runs
    /// until `max_redirect_depth` stops it.
    pub const fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self::new()
    }
}
