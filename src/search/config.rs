//! Search engine configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::grid::GridPos;

/// Search configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Start state for every search run by this engine.
    /// Configurations delivered at runtime carry only the maze and goal.
    pub start: GridPos,

    /// Delay between progress-event emissions, throttling the stream to a
    /// rate a live visualization can consume. Zero disables pacing.
    #[serde(with = "duration_ms", rename = "step_delay_ms")]
    pub step_delay: Duration,

    /// How often the driver checks for a pending configuration while idle.
    /// Tighter polling trades CPU for pickup latency.
    #[serde(with = "duration_ms", rename = "poll_interval_ms")]
    pub poll_interval: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            start: GridPos::new(1, 1),
            step_delay: Duration::from_millis(60),
            poll_interval: Duration::from_millis(100),
        }
    }
}

impl SearchConfig {
    /// Set the start state.
    #[must_use]
    pub fn with_start(mut self, start: GridPos) -> Self {
        self.start = start;
        self
    }

    /// Set the per-step pacing delay.
    #[must_use]
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Set the idle polling interval.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}
