//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Expansion steps performed (progress events emitted).
    pub steps: u32,

    /// Nodes expanded (states moved to the closed set).
    pub nodes_expanded: u32,

    /// Children discarded because their state was already on the frontier.
    pub duplicates_suppressed: u32,

    /// Maximum node depth reached.
    pub max_depth: u32,

    /// Total time spent searching (microseconds), pacing included.
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Expansion steps per second.
    #[must_use]
    pub fn steps_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.steps as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.nodes_expanded, 0);
    }

    #[test]
    fn test_stats_steps_per_second() {
        let mut stats = SearchStats::new();
        stats.steps = 500;
        stats.time_us = 1_000_000;

        assert_eq!(stats.steps_per_second(), 500.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.steps = 10;
        stats.duplicates_suppressed = 3;

        stats.reset();

        assert_eq!(stats.steps, 0);
        assert_eq!(stats.duplicates_suppressed, 0);
    }
}
