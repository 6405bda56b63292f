//! Error types for configuration loading.
//!
//! The per-tick simulation never fails; only configuration input can.

use thiserror::Error;

/// Result type alias using [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid JSON for [`crate::config::ArenaConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration parsed but violates a constraint.
    #[error("Invalid config: {0}")]
    Invalid(String),
}
