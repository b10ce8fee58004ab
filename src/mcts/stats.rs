//! Per-search counters.

use serde::{Deserialize, Serialize};

/// Statistics collected during one call to `MCTSSearch::search`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Rollouts performed.
    pub simulations: u32,

    /// Iterations that ended on an already-known finished position.
    pub terminal_hits: u32,

    /// Deepest node created.
    pub max_depth: u16,

    /// Wall-clock search time in microseconds.
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterations per second of wall-clock time.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 * 1_000_000.0 / self.time_us as f64
        }
    }
}
