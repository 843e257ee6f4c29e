//! Error types for the command description layer

use thiserror::Error;

/// Result type for command operations
pub type CmdResult<T = ()> = Result<T, CmdError>;

/// Errors raised while building or resolving command descriptors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CmdError {
    /// Command not found in registry
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// A lazily built descriptor could not be constructed
    #[error("descriptor for '{name}' unavailable: {reason}")]
    DescriptorUnavailable { name: String, reason: String },

    /// Command name is empty or only whitespace
    #[error("invalid command name: {0:?}")]
    InvalidName(String),
}

impl CmdError {
    /// Create a descriptor unavailable error
    pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
        CmdError::DescriptorUnavailable {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
