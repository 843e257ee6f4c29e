//! Error types for the completion engine
//!
//! Completion itself never fails on user input. Only loading configuration
//! can return an error.

use thiserror::Error;

/// Errors that can occur when loading completion settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration document could not be parsed
    #[error("invalid completion config: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric setting is out of range
    #[error("invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
