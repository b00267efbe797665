//! Timer configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default focus phase length (25 minutes).
pub const DEFAULT_FOCUS_SECS: u32 = 25 * 60;

/// Default break phase length (5 minutes).
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// Durations used by the session timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Focus phase length in seconds
    pub focus_secs: u32,
    /// Break phase length in seconds
    pub break_secs: u32,
    /// Delay between ticks in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_secs: DEFAULT_FOCUS_SECS,
            break_secs: DEFAULT_BREAK_SECS,
            tick_interval_ms: 1000,
        }
    }
}

impl TimerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the focus length. Zero is raised to one second.
    pub fn with_focus_secs(mut self, secs: u32) -> Self {
        self.focus_secs = secs.max(1);
        self
    }

    /// Set the break length. Zero is raised to one second.
    pub fn with_break_secs(mut self, secs: u32) -> Self {
        self.break_secs = secs.max(1);
        self
    }

    /// Set the tick interval.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = interval.as_millis().max(1) as u64;
        self
    }

    /// Delay between ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TimerConfig::default();
        assert_eq!(config.focus_secs, 1500);
        assert_eq!(config.break_secs, 300);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: TimerConfig = serde_json::from_str(r#"{"focus_secs": 600}"#).unwrap();
        assert_eq!(config.focus_secs, 600);
        assert_eq!(config.break_secs, 300);
    }

    #[test]
    fn test_tick_interval_builder() {
        let config = TimerConfig::new().with_tick_interval(Duration::from_millis(250));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        let config = TimerConfig::new().with_tick_interval(Duration::ZERO);
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_builder_rejects_zero_lengths() {
        let config = TimerConfig::new().with_focus_secs(0).with_break_secs(0);
        assert_eq!(config.focus_secs, 1);
        assert_eq!(config.break_secs, 1);
    }
}
