//! Error types for the color system

use thiserror::Error;

/// Errors that can occur when working with colors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// Colormap not found by name
    #[error("Colormap not found: {0}")]
    UnknownColormap(String),

    /// Invalid color value
    #[error("Invalid color value: {0}")]
    InvalidValue(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
