use serde::{Deserialize, Serialize};

/// Hard ceiling on sampling attempts (successful or not) for one run.
pub const MAX_ATTEMPTS: u64 = 10_000_000;

/// Rewires per edge used when the caller asks for zero.
///
/// An empirical choice, not a derived quantity; override it through
/// [`RewireLimits::default_rewires_per_edge`].
pub const DEFAULT_REWIRES_PER_EDGE: u64 = 4;

/// Iteration caps for a rewiring run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewireLimits {
    /// Total attempts allowed before the run is declared a failure.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u64,
    /// Substitute for a requested rewires-per-edge of zero.
    #[serde(default = "default_rewires_per_edge")]
    pub default_rewires_per_edge: u64,
}

fn default_max_attempts() -> u64 {
    MAX_ATTEMPTS
}

fn default_rewires_per_edge() -> u64 {
    DEFAULT_REWIRES_PER_EDGE
}

impl Default for RewireLimits {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            default_rewires_per_edge: DEFAULT_REWIRES_PER_EDGE,
        }
    }
}

impl RewireLimits {
    /// Same limits with a different attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Resolves the effective rewires-per-edge for a request.
    pub fn rewires_per_edge(&self, requested: u64) -> u64 {
        if requested == 0 {
            self.default_rewires_per_edge
        } else {
            requested
        }
    }

    /// Number of successful swaps required for a graph with `num_edges` edges.
    pub fn required_rewires(&self, num_edges: usize, requested: u64) -> u64 {
        (num_edges as u64).saturating_mul(self.rewires_per_edge(requested))
    }
}
