//! Command descriptors for completion
//!
//! This crate describes the command language the completion engine works
//! on. It does not execute anything.
//!
//! # Overview
//!
//! - **ArgType**: closed set of semantic argument kinds (enum, boolean, color,
//!   file path, object specifier, ...)
//! - **CommandDesc**: required, optional and keyword arguments of a command
//! - **CommandRegistry**: word trie of (possibly multi-word) command names,
//!   with descriptors that may be built lazily
//! - **DescriptorCache**: resolves lazy descriptors and remembers failures
//! - **split_words**: quote-aware tokenizer for argument text
//! - **CommandHistory**: bounded history with inline suggestions
//!
//! # Example
//!
//! ```
//! use molcli_cmd::{ArgType, CommandDesc, CommandRegistry, DescriptorCache};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(
//!     "lighting",
//!     CommandDesc::new()
//!         .optional("preset", ArgType::enum_of(["default", "full", "soft"]))
//!         .keyword("shadows", ArgType::Bool)
//!         .synopsis("change lighting parameters"),
//! );
//!
//! let mut cache = DescriptorCache::new();
//! let desc = cache.resolve(&registry, "lighting").unwrap();
//! assert!(desc.keyword_type("shadows").is_some());
//! ```

mod args;
mod desc;
mod error;
mod history;
mod parser;
mod registry;

pub use args::{ArgDef, ArgKind, ArgType, PathKind, SpecKind, ValueSupplier};
pub use desc::CommandDesc;
pub use error::{CmdError, CmdResult};
pub use history::CommandHistory;
pub use parser::{split_words, LineWords};
pub use registry::{CommandRegistry, Descriptor, DescriptorCache, DescriptorLoader};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::args::{ArgDef, ArgType, PathKind, SpecKind};
    pub use crate::desc::CommandDesc;
    pub use crate::error::{CmdError, CmdResult};
    pub use crate::registry::{CommandRegistry, DescriptorCache};
}
