//! Molecular entity model for command-line completion
//!
//! The completion engine never owns live structures. Hosts describe what is
//! currently loaded with the plain value types in this crate: models with
//! hierarchical ids, chains with an aligned one-letter sequence, and residues
//! that may be missing from the experimental structure.
//!
//! # Example
//!
//! ```
//! use molcli_mol::{Chain, Model, ModelId};
//!
//! let model = Model::new(ModelId::new(&[1]), "protein A")
//!     .with_chain(Chain::new('A'))
//!     .with_chain(Chain::new('B'));
//!
//! assert_eq!(model.id.spec(), "#1");
//! assert_eq!(model.chains.len(), 2);
//! ```

mod chain;
mod error;
mod file;
mod model;
pub mod residue;

pub use chain::{Chain, Residue};
pub use error::{MolError, MolResult};
pub use file::FileSpec;
pub use model::{Model, ModelId};
