//! Error types for entity construction
//!
//! Only host-facing constructors can fail; nothing typed by the user on the
//! command line ever produces one of these.

use thiserror::Error;

/// Errors that can occur when building entity values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolError {
    /// Model id string is empty or has a non-numeric component
    #[error("Invalid model id: {0:?}")]
    InvalidModelId(String),

    /// Residue list and one-letter sequence are not aligned
    #[error("Sequence length mismatch: {residues} residues, {characters} characters")]
    SequenceMismatch { residues: usize, characters: usize },
}

/// Result type for entity operations
pub type MolResult<T> = Result<T, MolError>;
