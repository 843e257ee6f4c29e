//! Chains and residues
//!
//! A chain keeps its residues index-aligned with a one-letter sequence
//! string. Positions present in the sequence but absent from the structure
//! are stored as `None`.

use serde::{Deserialize, Serialize};

use crate::error::{MolError, MolResult};

/// A residue observed in the structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residue {
    /// Residue name (e.g. "ALA")
    pub name: String,
    /// Author residue number
    pub number: i64,
    /// One-letter code
    pub one_letter_code: char,
    /// Part of a beta strand
    pub is_strand: bool,
    /// Part of a helix
    pub is_helix: bool,
}

impl Residue {
    /// Create a residue with no secondary structure assignment
    pub fn new(name: impl Into<String>, number: i64, one_letter_code: char) -> Self {
        Residue {
            name: name.into(),
            number,
            one_letter_code,
            is_strand: false,
            is_helix: false,
        }
    }

    /// Mark as a strand residue
    pub fn strand(mut self) -> Self {
        self.is_strand = true;
        self
    }

    /// Mark as a helix residue
    pub fn helix(mut self) -> Self {
        self.is_helix = true;
        self
    }
}

/// A polymer chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    /// Single-character chain id
    pub chain_id: char,
    /// Optional description (e.g. the entity name)
    pub description: Option<String>,
    /// Residues aligned with `characters`; gaps are `None`
    pub residues: Vec<Option<Residue>>,
    /// One-letter sequence
    pub characters: String,
    /// Number displayed for the first sequence position
    pub numbering_start: i64,
}

impl Chain {
    /// Create an empty chain
    pub fn new(chain_id: char) -> Self {
        Chain {
            chain_id,
            description: None,
            residues: Vec::new(),
            characters: String::new(),
            numbering_start: 1,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the display numbering offset
    pub fn with_numbering_start(mut self, start: i64) -> Self {
        self.numbering_start = start;
        self
    }

    /// Attach residues and their aligned sequence
    ///
    /// Fails if the number of residues and sequence characters differ.
    pub fn with_residues(
        mut self,
        residues: Vec<Option<Residue>>,
        characters: impl Into<String>,
    ) -> MolResult<Self> {
        let characters = characters.into();
        let n_chars = characters.chars().count();
        if n_chars != residues.len() {
            return Err(MolError::SequenceMismatch {
                residues: residues.len(),
                characters: n_chars,
            });
        }
        self.residues = residues;
        self.characters = characters;
        Ok(self)
    }

    /// Number of sequence positions, including missing residues
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// True if the chain has no sequence positions
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// One-letter code at a sequence position
    pub fn character_at(&self, index: usize) -> Option<char> {
        self.characters.chars().nth(index)
    }
}
