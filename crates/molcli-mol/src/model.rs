//! Models and hierarchical model ids
//!
//! A model id is a tuple of integers: `(1,)` is a top-level model and
//! `(1, 2)` its second sub-model. Ids are rendered as `#1` and `#1.2`.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::chain::Chain;
use crate::error::MolError;

/// Hierarchical model identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModelId(SmallVec<[u32; 4]>);

impl ModelId {
    /// Create an id from its components
    pub fn new(parts: &[u32]) -> Self {
        ModelId(SmallVec::from_slice(parts))
    }

    /// Components of the id
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Number of components (1 for a top-level model)
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// True for ids with a single component
    pub fn is_top_level(&self) -> bool {
        self.0.len() == 1
    }

    /// Canonical spec string, e.g. `#1.2`
    pub fn spec(&self) -> String {
        format!("#{}", self)
    }

    /// Ordering used when listing models
    ///
    /// Every single-component id sorts before any multi-component id. Within
    /// each group ids compare component-wise.
    pub fn natural_cmp(&self, other: &ModelId) -> Ordering {
        (!self.is_top_level(), self.parts()).cmp(&(!other.is_top_level(), other.parts()))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for ModelId {
    type Err = MolError;

    /// Parse `1.2` or `#1.2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.strip_prefix('#').unwrap_or(s);
        if body.is_empty() {
            return Err(MolError::InvalidModelId(s.to_string()));
        }
        let parts = body
            .split('.')
            .map(|p| p.parse::<u32>())
            .collect::<Result<SmallVec<[u32; 4]>, _>>()
            .map_err(|_| MolError::InvalidModelId(s.to_string()))?;
        Ok(ModelId(parts))
    }
}

/// A model as seen by the completion engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Hierarchical id
    pub id: ModelId,
    /// Display name
    pub name: String,
    /// Chains of this model
    pub chains: Vec<Chain>,
    /// Residue names that are not one of the standard amino acids
    pub nonstandard_residue_names: BTreeSet<String>,
}

impl Model {
    /// Create a model with no chains
    pub fn new(id: ModelId, name: impl Into<String>) -> Self {
        Model {
            id,
            name: name.into(),
            chains: Vec::new(),
            nonstandard_residue_names: BTreeSet::new(),
        }
    }

    /// Add a chain
    pub fn with_chain(mut self, chain: Chain) -> Self {
        self.chains.push(chain);
        self
    }

    /// Add a non-standard residue name (ligands, modified residues)
    pub fn with_nonstandard_residue(mut self, name: impl Into<String>) -> Self {
        self.nonstandard_residue_names.insert(name.into());
        self
    }

    /// Find a chain by its id
    pub fn chain(&self, chain_id: char) -> Option<&Chain> {
        self.chains.iter().find(|c| c.chain_id == chain_id)
    }
}
