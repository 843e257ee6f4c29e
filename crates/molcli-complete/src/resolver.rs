//! Command line completion
//!
//! Entry point of the engine. The line is re-read from scratch on every
//! call: first the command name, then the argument slot under the cursor,
//! then the declared type of that slot.
//!
//! Sources are tried in order until one applies:
//!
//! 1. command names, while the command is still being typed
//! 2. the value of the current keyword or positional argument
//! 3. object specifiers, for words starting with `#` `/` `:` or `@`
//! 4. keyword names, once every required argument is present
//! 5. file paths
//!
//! An object specifier that addresses nothing is only returned when the
//! word is not a path either.

use std::sync::Arc;

use molcli_cmd::{split_words, ArgType, CommandDesc, DescriptorCache};

use crate::action::Action;
use crate::context::{Context, EntityFilter};
use crate::entity::{complete_entity, Level};
use crate::markup::type_label;
use crate::path::complete_path;
use crate::state::CompletionState;
use crate::value::ValueResolver;

/// Completes command lines against a [`Context`]
///
/// Owns the descriptor cache, so deferred descriptors are built once and
/// failures are not retried. Call [`clear_cache`](Self::clear_cache) after
/// the registry changes.
#[derive(Debug, Default)]
pub struct Completer {
    cache: DescriptorCache,
}

/// Where the argument walk ended
struct ArgPosition<'a> {
    /// Positional words seen so far
    positional: usize,
    /// A keyword was given, by name or as `kw=value`
    keyword_used: bool,
    /// Keyword typed as the last complete word and still waiting for its value
    pending: Option<&'a str>,
}

impl Completer {
    /// Create a completer with an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget resolved descriptors and remembered failures
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Help tooltip of a command, if its descriptor can be resolved
    pub fn tooltip(&mut self, ctx: &Context, name: &str) -> Option<String> {
        self.cache
            .resolve(ctx.registry(), name)
            .map(|desc| desc.tooltip(name))
    }

    /// Candidates for a partially typed command line
    pub fn complete(&mut self, ctx: &Context, text: &str) -> CompletionState {
        let lstripped = text.trim_start();
        if lstripped.is_empty() {
            return CompletionState::empty();
        }
        let stripped = lstripped.trim_end();
        let names = ctx.registry().names();
        let active = active_command(&names, lstripped, stripped);

        let matched: Vec<&String> = names.iter().filter(|n| n.starts_with(lstripped)).collect();
        let exact_only = matched.len() == 1 && matched[0] == lstripped;
        if !matched.is_empty() && !exact_only {
            return command_names(lstripped, &matched, active);
        }

        let Some(active) = active else {
            let last = split_words(lstripped).last;
            return complete_path(last, None, ctx.config().path_limit)
                .unwrap_or_else(CompletionState::empty);
        };
        let command = Some(active.to_string());
        let rest = &lstripped[active.len()..];
        if rest.is_empty() {
            return CompletionState::empty().with_command(command);
        }
        let Some(desc) = self.cache.resolve(ctx.registry(), active) else {
            log::debug!("No descriptor for '{}'", active);
            return CompletionState::empty().with_command(command);
        };
        complete_arguments(ctx, active, &desc, rest)
    }
}

/// Longest command name the line extends past, or equals
fn active_command<'a>(names: &'a [String], lstripped: &str, stripped: &str) -> Option<&'a str> {
    names
        .iter()
        .filter(|name| {
            stripped == name.as_str()
                || lstripped
                    .strip_prefix(name.as_str())
                    .map_or(false, |rest| rest.starts_with(char::is_whitespace))
        })
        .max_by_key(|name| name.len())
        .map(String::as_str)
}

fn command_names(lstripped: &str, matched: &[&String], active: Option<&str>) -> CompletionState {
    let mut completions: Vec<String> = Vec::new();
    if !lstripped.contains(char::is_whitespace) {
        for name in matched {
            let base = name.split_whitespace().next().unwrap_or(name.as_str());
            if !completions.iter().any(|c| c == base) {
                completions.push(base.to_string());
            }
        }
        for name in matched {
            if name.contains(' ') {
                completions.push(name.to_string());
            }
        }
    } else {
        completions.extend(matched.iter().map(|n| n.to_string()));
    }
    let info = vec![type_label("command"); completions.len()];
    CompletionState::new(lstripped, completions, active.map(str::to_string))
        .with_info(info)
        .with_kind("command")
}

fn walk_arguments<'a>(desc: &CommandDesc, words: &[&'a str]) -> ArgPosition<'a> {
    let mut position = ArgPosition {
        positional: 0,
        keyword_used: false,
        pending: None,
    };
    for &word in words {
        if position.pending.take().is_some() {
            continue;
        }
        if let Some(arg) = desc.keyword_type(word) {
            position.keyword_used = true;
            if !arg.is_noarg() {
                position.pending = Some(word);
            }
            continue;
        }
        if keyword_assignment(desc, word).is_some() {
            position.keyword_used = true;
            continue;
        }
        position.positional += 1;
    }
    position
}

/// Split `kw=value` when `kw` is a keyword of `desc`
fn keyword_assignment<'a, 'w>(desc: &'a CommandDesc, word: &'w str) -> Option<(&'a ArgType, &'w str)> {
    let (name, value) = word.split_once('=')?;
    desc.keyword_type(name).map(|arg| (arg, value))
}

fn complete_arguments(ctx: &Context, command: &str, desc: &Arc<CommandDesc>, rest: &str) -> CompletionState {
    let line = split_words(rest);
    let last = line.last;
    let position = walk_arguments(desc, &line.words);
    let cmd = Some(command.to_string());

    if position.keyword_used && position.positional < desc.required_count() {
        return CompletionState::new(last, vec![String::new()], cmd)
            .with_info(vec![Action::TypeError.info()])
            .with_actions(vec![Action::TypeError])
            .with_kind("error");
    }

    let resolver = ValueResolver::new(ctx, Some(command));
    let assignment = keyword_assignment(desc, last);
    let value = match (position.pending, assignment) {
        (Some(keyword), _) => desc
            .keyword_type(keyword)
            .and_then(|arg| resolver.resolve(arg, last)),
        (None, Some((arg, partial))) => resolver.resolve(arg, partial),
        (None, None) => desc
            .positional(position.positional)
            .and_then(|def| resolver.resolve(&def.arg, last)),
    };
    if let Some(state) = value {
        return state;
    }

    let entity = last
        .chars()
        .next()
        .and_then(Level::from_sigil)
        .map(|level| complete_entity(level, ctx, last, Some(command), EntityFilter::All));
    if let Some(state) = entity.as_ref().filter(|s| !s.is_empty()) {
        return state.clone();
    }

    let value_expected = position.pending.is_some() || assignment.is_some();
    if !value_expected && position.positional >= desc.required_count() {
        let keywords: Vec<String> = desc
            .keywords_starting_with(last)
            .into_iter()
            .map(str::to_string)
            .collect();
        if !keywords.is_empty() {
            let info = vec![type_label("keyword"); keywords.len()];
            return CompletionState::new(last, keywords, cmd)
                .with_info(info)
                .with_kind("keyword");
        }
    }

    // an unmatched specifier may still be an absolute path
    complete_path(last, Some(command), ctx.config().path_limit)
        .or(entity)
        .unwrap_or_else(|| CompletionState::new(last, Vec::new(), cmd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use molcli_cmd::{CmdError, CommandRegistry, SpecKind};
    use molcli_mol::{Chain, Model, ModelId};

    fn registry() -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        registry.register(
            "color",
            CommandDesc::new()
                .required("objects", ArgType::Spec(SpecKind::Objects))
                .optional("color", ArgType::Color)
                .optional("what", ArgType::TargetFlags)
                .keyword("what", ArgType::TargetFlags)
                .keyword("transparency", ArgType::Float)
                .keyword("halfbond", ArgType::Bool),
        );
        registry.register("cartoon", CommandDesc::new().optional("objects", ArgType::Spec(SpecKind::Objects)));
        registry.register("toolshed", CommandDesc::new());
        registry.register("toolshed install", CommandDesc::new().required("name", ArgType::Text));
        registry.register("toolshed list", CommandDesc::new());
        registry.register(
            "turn",
            CommandDesc::new()
                .optional("axis", ArgType::Axis)
                .keyword("center", ArgType::Spec(SpecKind::Objects))
                .keyword("coordinates", ArgType::NoArg),
        );
        registry.register_deferred("kvfinder", || Err(CmdError::unavailable("kvfinder", "not installed")));
        registry
    }

    fn context() -> Context {
        Context::new()
            .with_registry(Arc::new(registry()))
            .with_model(
                Model::new(ModelId::new(&[1]), "protein")
                    .with_chain(Chain::new('A'))
                    .with_chain(Chain::new('B')),
            )
            .with_selectors(["helix", "strand"])
    }

    #[test]
    fn test_empty_line() {
        let ctx = context();
        let mut completer = Completer::new();
        assert_eq!(completer.complete(&ctx, ""), CompletionState::empty());
        assert_eq!(completer.complete(&ctx, "   "), CompletionState::empty());
    }

    #[test]
    fn test_command_names_base_words_first() {
        let ctx = context();
        let mut completer = Completer::new();
        let state = completer.complete(&ctx, "to");
        assert_eq!(state.completions(), &["toolshed", "toolshed install", "toolshed list"]);
        assert_eq!(state.kind(), "command");
        assert_eq!(state.info()[0], "(<i>command</i>)");

        let state = completer.complete(&ctx, "c");
        assert_eq!(state.completions(), &["cartoon", "color"]);
    }

    #[test]
    fn test_subcommands_after_space() {
        let ctx = context();
        let state = Completer::new().complete(&ctx, "toolshed ");
        assert_eq!(state.completions(), &["toolshed install", "toolshed list"]);
        assert_eq!(state.command(), Some("toolshed"));
    }

    #[test]
    fn test_exact_command_without_arguments() {
        let ctx = context();
        let state = Completer::new().complete(&ctx, "turn");
        assert!(state.is_empty());
        assert_eq!(state.command(), Some("turn"));
    }

    #[test]
    fn test_positional_value() {
        let ctx = context();
        let mut completer = Completer::new();
        let state = completer.complete(&ctx, "color ");
        assert_eq!(state.completions(), &["#1"]);
        assert_eq!(state.command(), Some("color"));

        let state = completer.complete(&ctx, "color #1 ora");
        assert_eq!(state.completions(), &["orange", "orangered"]);

        let state = completer.complete(&ctx, "color #1 red a");
        assert_eq!(state.completions(), &["ac", "as", "ab", "ap", "ar", "am"]);
    }

    #[test]
    fn test_keyword_value() {
        let ctx = context();
        let mut completer = Completer::new();
        let state = completer.complete(&ctx, "color #1 halfbond ");
        assert_eq!(state.completions(), &["true", "false"]);

        let state = completer.complete(&ctx, "color #1 halfbond=f");
        assert_eq!(state.completions(), &["false"]);
        assert_eq!(state.text(), "f");
    }

    #[test]
    fn test_keyword_listing() {
        let ctx = context();
        let mut completer = Completer::new();
        let state = completer.complete(&ctx, "turn x ");
        assert_eq!(state.completions(), &["center", "coordinates"]);
        assert_eq!(state.kind(), "keyword");

        let state = completer.complete(&ctx, "color #1 red ac t");
        assert_eq!(state.completions(), &["transparency"]);
    }

    #[test]
    fn test_noarg_keyword_continues() {
        let ctx = context();
        let state = Completer::new().complete(&ctx, "turn coordinates ");
        assert_eq!(state.completions(), &["x", "y", "z", "-x", "-y", "-z"]);
    }

    #[test]
    fn test_not_enough_arguments() {
        let ctx = context();
        let state = Completer::new().complete(&ctx, "color transparency 0.5 ");
        assert_eq!(state.completions(), &[""]);
        assert_eq!(state.actions(), &[Action::TypeError]);
        assert!(state.info()[0].contains("Not enough arguments"));
    }

    #[test]
    fn test_sigil_fallback() {
        let ctx = context();
        let state = Completer::new().complete(&ctx, "turn #1/");
        assert_eq!(state.completions(), &["#1/A", "#1/B"]);
        assert_eq!(state.kind(), "model,chain");
    }

    #[test]
    fn test_unresolvable_descriptor() {
        let ctx = context();
        let mut completer = Completer::new();
        let state = completer.complete(&ctx, "kvfinder ");
        assert!(state.is_empty());
        assert_eq!(state.command(), Some("kvfinder"));
        assert!(completer.tooltip(&ctx, "kvfinder").is_none());
    }

    #[test]
    fn test_tooltip() {
        let ctx = context();
        let tip = Completer::new().tooltip(&ctx, "turn").unwrap();
        assert!(tip.starts_with("<b>turn</b> [<i>axis</i>] [<i>options</i>]"));
    }

    #[test]
    fn test_active_command_prefers_longest() {
        let names = vec!["toolshed".to_string(), "toolshed install".to_string()];
        assert_eq!(active_command(&names, "toolshed install x", "toolshed install x"), Some("toolshed install"));
        assert_eq!(active_command(&names, "toolshed ", "toolshed"), Some("toolshed"));
        assert_eq!(active_command(&names, "toolshedx", "toolshedx"), None);
    }
}
