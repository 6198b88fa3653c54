//! Workout tracking configuration

use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Tunables for the active-workout tracker and its elapsed-time ticker.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackerConfig {
    /// Ticker publish period in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// How long a cached progress snapshot stays fresh, in seconds
    #[serde(default = "default_progress_cache_ttl_secs")]
    pub progress_cache_ttl_secs: u64,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl TrackerConfig {
    /// Ticker period as a [`Duration`]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Progress cache TTL as a [`Duration`]
    pub fn progress_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.progress_cache_ttl_secs)
    }

    /// Validate tracking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.tick_interval_ms == 0 {
            return Err(ValidationError::InvalidTickInterval);
        }
        if self.tick_interval_ms > 60_000 {
            return Err(ValidationError::TickIntervalTooLarge);
        }
        if self.progress_cache_ttl_secs == 0 {
            return Err(ValidationError::InvalidCacheTtl);
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            progress_cache_ttl_secs: default_progress_cache_ttl_secs(),
            log_level: default_log_level(),
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_progress_cache_ttl_secs() -> u64 {
    300
}

fn default_log_level() -> String {
    "info,repcycle=debug".to_string()
}
