//! Command registry and descriptor cache
//!
//! Commands are stored in a trie keyed by words, so `toolshed install` lives
//! under `toolshed`. Descriptors are either ready or built on first use by a
//! loader that may fail.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::desc::CommandDesc;
use crate::error::{CmdError, CmdResult};

/// Function that builds a descriptor on demand
pub type DescriptorLoader = Arc<dyn Fn() -> CmdResult<CommandDesc> + Send + Sync>;

/// A registered descriptor
#[derive(Clone)]
pub enum Descriptor {
    /// Built at registration time
    Ready(Arc<CommandDesc>),
    /// Built on first use
    Deferred(DescriptorLoader),
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Ready(desc) => f.debug_tuple("Ready").field(desc).finish(),
            Descriptor::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// One word of the command trie
#[derive(Debug, Clone, Default)]
struct WordInfo {
    descriptor: Option<Descriptor>,
    subcommands: BTreeMap<String, WordInfo>,
}

/// Registry mapping command names to descriptors
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    root: BTreeMap<String, WordInfo>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command with a ready descriptor
    ///
    /// Multi-word names (`"toolshed install"`) register a subcommand.
    pub fn register(&mut self, name: &str, desc: CommandDesc) {
        self.insert(name, Descriptor::Ready(Arc::new(desc)));
    }

    /// Register a command whose descriptor is built on first use
    pub fn register_deferred<F>(&mut self, name: &str, loader: F)
    where
        F: Fn() -> CmdResult<CommandDesc> + Send + Sync + 'static,
    {
        self.insert(name, Descriptor::Deferred(Arc::new(loader)));
    }

    /// Register `alias` as another name for the existing command `target`
    pub fn add_alias(&mut self, alias: &str, target: &str) -> CmdResult {
        let descriptor = self
            .get(target)
            .cloned()
            .ok_or_else(|| CmdError::UnknownCommand(target.to_string()))?;
        if normalize(alias).is_empty() {
            return Err(CmdError::InvalidName(alias.to_string()));
        }
        self.insert(alias, descriptor);
        log::debug!("Registered alias '{}' for '{}'", alias, target);
        Ok(())
    }

    fn insert(&mut self, name: &str, descriptor: Descriptor) {
        let mut words = name.split_whitespace();
        let Some(first) = words.next() else {
            log::warn!("Ignoring command with empty name");
            return;
        };
        let mut node = self.root.entry(first.to_string()).or_default();
        for word in words {
            node = node.subcommands.entry(word.to_string()).or_default();
        }
        node.descriptor = Some(descriptor);
    }

    /// Look up the descriptor registered under a full command name
    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        let mut words = name.split_whitespace();
        let mut node = self.root.get(words.next()?)?;
        for word in words {
            node = node.subcommands.get(word)?;
        }
        node.descriptor.as_ref()
    }

    /// Check if a command exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered command names, space-joined, in sorted trie order
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for (word, node) in &self.root {
            collect_names(word.clone(), node, &mut names);
        }
        names
    }

    /// Get the number of registered commands
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_names(prefix: String, node: &WordInfo, out: &mut Vec<String>) {
    if node.descriptor.is_some() {
        out.push(prefix.clone());
    }
    for (word, child) in &node.subcommands {
        collect_names(format!("{} {}", prefix, word), child, out);
    }
}

fn normalize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolves descriptors and remembers the ones that cannot be built
///
/// Owned by the caller of the completion engine. Call [`clear`](Self::clear)
/// whenever the registry changes.
#[derive(Debug, Default)]
pub struct DescriptorCache {
    resolved: AHashMap<String, Arc<CommandDesc>>,
    unresolvable: AHashSet<String>,
}

impl DescriptorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor of `name`, building deferred descriptors on first use
    ///
    /// Returns `None` for unknown commands and for commands whose loader
    /// failed; failures are remembered and not retried until cleared.
    pub fn resolve(&mut self, registry: &CommandRegistry, name: &str) -> Option<Arc<CommandDesc>> {
        if self.unresolvable.contains(name) {
            return None;
        }
        if let Some(desc) = self.resolved.get(name) {
            return Some(desc.clone());
        }
        match registry.get(name)? {
            Descriptor::Ready(desc) => Some(desc.clone()),
            Descriptor::Deferred(loader) => match loader() {
                Ok(desc) => {
                    let desc = Arc::new(desc);
                    self.resolved.insert(name.to_string(), desc.clone());
                    Some(desc)
                }
                Err(e) => {
                    log::warn!("Cannot resolve descriptor for '{}': {}", name, e);
                    self.unresolvable.insert(name.to_string());
                    None
                }
            },
        }
    }

    /// True if `name` previously failed to resolve
    pub fn is_unresolvable(&self, name: &str) -> bool {
        self.unresolvable.contains(name)
    }

    /// Forget all resolved descriptors and remembered failures
    pub fn clear(&mut self) {
        log::debug!(
            "Clearing descriptor cache ({} resolved, {} unresolvable)",
            self.resolved.len(),
            self.unresolvable.len()
        );
        self.resolved.clear();
        self.unresolvable.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register("toolshed", CommandDesc::new());
        registry.register("toolshed install", CommandDesc::new().required("name", ArgType::Text));
        registry.register("toolshed list", CommandDesc::new());
        registry.register("turn", CommandDesc::new().optional("axis", ArgType::Axis));
        registry.register("color", CommandDesc::new());
        registry
    }

    #[test]
    fn test_names_in_trie_order() {
        let names = registry().names();
        assert_eq!(
            names,
            vec!["color", "toolshed", "toolshed install", "toolshed list", "turn"]
        );
    }

    #[test]
    fn test_get_subcommand() {
        let registry = registry();
        assert!(registry.contains("toolshed install"));
        assert!(registry.contains("toolshed  install"));
        assert!(!registry.contains("toolshed remove"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_intermediate_word_without_descriptor() {
        let mut registry = CommandRegistry::new();
        registry.register("volume zone", CommandDesc::new());
        assert_eq!(registry.names(), vec!["volume zone"]);
        assert!(!registry.contains("volume"));
    }

    #[test]
    fn test_alias() {
        let mut registry = registry();
        registry.add_alias("rotate", "turn").unwrap();
        let mut cache = DescriptorCache::new();
        let desc = cache.resolve(&registry, "rotate").unwrap();
        assert_eq!(desc.optional[0].name, "axis");

        assert_eq!(
            registry.add_alias("x", "missing").unwrap_err(),
            CmdError::UnknownCommand("missing".to_string())
        );
    }

    #[test]
    fn test_deferred_resolved_once() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let mut registry = CommandRegistry::new();
        registry.register_deferred("surface", || {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Ok(CommandDesc::new().keyword("probe", ArgType::Float))
        });
        let mut cache = DescriptorCache::new();
        assert!(cache.resolve(&registry, "surface").is_some());
        assert!(cache.resolve(&registry, "surface").is_some());
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_memoized_until_clear() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        let mut registry = CommandRegistry::new();
        registry.register_deferred("kvfinder", || {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Err(CmdError::unavailable("kvfinder", "bundle not installed"))
        });
        let mut cache = DescriptorCache::new();
        assert!(cache.resolve(&registry, "kvfinder").is_none());
        assert!(cache.resolve(&registry, "kvfinder").is_none());
        assert!(cache.is_unresolvable("kvfinder"));
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);

        cache.clear();
        assert!(!cache.is_unresolvable("kvfinder"));
        assert!(cache.resolve(&registry, "kvfinder").is_none());
        assert_eq!(CALLS.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_unknown_command() {
        let mut cache = DescriptorCache::new();
        assert!(cache.resolve(&registry(), "nothing").is_none());
        assert!(!cache.is_unresolvable("nothing"));
    }
}
