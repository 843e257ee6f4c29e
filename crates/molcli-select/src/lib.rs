//! Address-spec parsers
//!
//! Parses the compact identifier-set syntaxes used inside object specifiers:
//!
//! - Model specs: `1,3-5,2.1`, `1.2-4`
//! - Chain specs: `A,C-E`
//! - Residue specs: `10,20-25`
//!
//! Parsing never fails. The user is usually still typing, so malformed
//! tokens are dropped and the rest of the spec is kept. An empty spec
//! matches nothing.
//!
//! # Example
//!
//! ```
//! use molcli_mol::{Model, ModelId};
//! use molcli_select::ModelSpec;
//!
//! let models = vec![
//!     Model::new(ModelId::new(&[1]), "a"),
//!     Model::new(ModelId::new(&[2]), "b"),
//!     Model::new(ModelId::new(&[2, 1]), "c"),
//! ];
//! let spec = ModelSpec::parse("1,2.1");
//! let picked: Vec<String> = spec.filter(&models).iter().map(|m| m.name.clone()).collect();
//! assert_eq!(picked, vec!["a", "c"]);
//! ```

mod chain_spec;
mod model_spec;
mod residue_spec;

pub use chain_spec::{ChainItem, ChainSpec};
pub use model_spec::{ModelItem, ModelSpec};
pub use residue_spec::{ResidueEntry, ResidueSpec};

/// Split a spec at its last `-` or `,`
///
/// Returns `(already_specified, separator, being_typed)`. Without any
/// separator the whole spec is returned as the first part.
///
/// ```
/// use molcli_select::rsplit_spec;
///
/// assert_eq!(rsplit_spec("1-3"), ("1", "-", "3"));
/// assert_eq!(rsplit_spec("1-3,5"), ("1-3", ",", "5"));
/// assert_eq!(rsplit_spec("12"), ("12", "", ""));
/// ```
pub fn rsplit_spec(spec: &str) -> (&str, &str, &str) {
    match spec.rfind(|c: char| c == '-' || c == ',') {
        Some(idx) => (&spec[..idx], &spec[idx..idx + 1], &spec[idx + 1..]),
        None => (spec, "", ""),
    }
}

/// True if the spec is building a list or range
pub fn has_separator(spec: &str) -> bool {
    spec.contains(',') || spec.contains('-')
}
