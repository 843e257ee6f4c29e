//! Completion engine for a molecular command language
//!
//! Given a partially typed command line and a [`Context`] describing the host
//! (models, selectors, colors, command registry), [`Completer::complete`]
//! returns a [`CompletionState`]: candidate strings with annotations, an
//! optional [`Action`] per candidate, and a kind tag for rendering.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use molcli_cmd::prelude::*;
//! use molcli_complete::{Completer, Context};
//! use molcli_mol::{Chain, Model, ModelId};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(
//!     "cartoon",
//!     CommandDesc::new().optional("objects", ArgType::Spec(SpecKind::Objects)),
//! );
//!
//! let ctx = Context::new()
//!     .with_registry(Arc::new(registry))
//!     .with_model(
//!         Model::new(ModelId::new(&[1]), "protein")
//!             .with_chain(Chain::new('A'))
//!             .with_chain(Chain::new('B')),
//!     );
//!
//! let mut completer = Completer::new();
//! let state = completer.complete(&ctx, "cartoon #1/");
//! assert_eq!(state.completions(), &["#1/A", "#1/B"]);
//! assert_eq!(state.command(), Some("cartoon"));
//! ```

mod action;
mod config;
mod context;
mod entity;
mod error;
pub mod markup;
mod path;
mod recent;
mod resolver;
mod state;
mod value;

pub use action::{Action, ActionTarget, FileMode, PickHistory};
pub use config::CompletionConfig;
pub use context::{CommandRunner, Context, EntityFilter, FileListFn, FileModeFn, ModelFilter};
pub use entity::{complete_atom, complete_chain, complete_entity, complete_model, complete_residue, Level};
pub use error::ConfigError;
pub use path::complete_path;
pub use recent::complete_recent_files;
pub use resolver::Completer;
pub use state::CompletionState;
pub use value::ValueResolver;

/// Commonly used types
pub mod prelude {
    pub use crate::{Action, Completer, CompletionConfig, CompletionState, Context, EntityFilter};
}
