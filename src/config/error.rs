//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Tick interval must be greater than zero")]
    InvalidTickInterval,

    #[error("Tick interval exceeds maximum allowed (60000 ms)")]
    TickIntervalTooLarge,

    #[error("Progress cache TTL must be greater than zero")]
    InvalidCacheTtl,
}
