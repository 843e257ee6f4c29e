//! Object specifier completion
//!
//! Walks the `#model/chain:residue@atom` addressing grammar. Each level
//! either lists its own candidates or hands the rest of the word to a lower
//! level with the models narrowed to what the consumed prefix selects. The
//! lower level's result is then re-anchored under the consumed prefix.
//!
//! Ranges and lists are continued in place: after `#1,` the remaining models
//! are offered as `#1,2`, `#1,3`, ... as long as the part already written
//! selects at least one model.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use molcli_mol::residue::{amino_acid_label, AMINO_ACIDS, ATOM_NAMES};
use molcli_mol::{Chain, Model};
use molcli_select::{has_separator, rsplit_spec, ChainSpec, ModelSpec, ResidueSpec};

use crate::action::Action;
use crate::context::{Context, EntityFilter};
use crate::markup::{colored, type_label};
use crate::state::CompletionState;

/// Grammar level of an object specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// `#1.2`
    Model,
    /// `/A`
    Chain,
    /// `:45` or `:ALA`
    Residue,
    /// `@CA`
    Atom,
}

impl Level {
    /// Kind tag of candidates produced at this level
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Model => "model",
            Level::Chain => "chain",
            Level::Residue => "residue",
            Level::Atom => "atom",
        }
    }

    /// Level introduced by a leading sigil
    pub fn from_sigil(c: char) -> Option<Level> {
        match c {
            '#' => Some(Level::Model),
            '/' => Some(Level::Chain),
            ':' => Some(Level::Residue),
            '@' => Some(Level::Atom),
            _ => None,
        }
    }
}

/// Complete a model specifier such as `#1`, `#1,2`, `#1/A` or `#1:ALA`
pub fn complete_model(ctx: &Context, word: &str, command: Option<&str>, filter: EntityFilter) -> CompletionState {
    complete_entity(Level::Model, ctx, word, command, filter)
}

/// Complete a chain specifier such as `/A` or `/A:12`
pub fn complete_chain(ctx: &Context, word: &str, command: Option<&str>, filter: EntityFilter) -> CompletionState {
    complete_entity(Level::Chain, ctx, word, command, filter)
}

/// Complete a residue specifier such as `:AL` or `:ALA@C`
pub fn complete_residue(ctx: &Context, word: &str, command: Option<&str>, filter: EntityFilter) -> CompletionState {
    complete_entity(Level::Residue, ctx, word, command, filter)
}

/// Complete an atom specifier such as `@C`
pub fn complete_atom(ctx: &Context, word: &str, command: Option<&str>) -> CompletionState {
    complete_at(Level::Atom, ctx, word, command)
}

/// Complete `word` starting at `level`, addressing only models allowed by `filter`
pub fn complete_entity(
    level: Level,
    ctx: &Context,
    word: &str,
    command: Option<&str>,
    filter: EntityFilter,
) -> CompletionState {
    let ctx = match filter {
        EntityFilter::All => ctx.clone(),
        _ => ctx.with_models(ctx.models_for(filter)),
    };
    complete_at(level, &ctx, word, command)
}

fn complete_at(level: Level, ctx: &Context, word: &str, command: Option<&str>) -> CompletionState {
    match level {
        Level::Model => model_level(ctx, word, command),
        Level::Chain => chain_level(ctx, word, command),
        Level::Residue => residue_level(ctx, word, command),
        Level::Atom => atom_level(word, command),
    }
}

/// Hand `rest` to `level` with `ctx`, then re-anchor under `head`
fn descend(
    level: Level,
    ctx: &Context,
    head: &str,
    parent: Level,
    rest: &str,
    word: &str,
    command: Option<&str>,
) -> CompletionState {
    complete_at(level, ctx, rest, command).prefixed(head, parent.tag(), word)
}

fn model_level(ctx: &Context, word: &str, command: Option<&str>) -> CompletionState {
    if let Some(idx) = word.rfind('/') {
        let (head, rest) = word.split_at(idx);
        let narrowed = narrow_models(ctx, head);
        return descend(Level::Chain, &narrowed, head, Level::Model, rest, word, command);
    }
    if let Some(idx) = word.find(':') {
        let (head, rest) = word.split_at(idx);
        let narrowed = narrow_models(ctx, head);
        return descend(Level::Residue, &narrowed, head, Level::Model, rest, word, command);
    }
    if let Some(idx) = word.find('@') {
        let (head, rest) = word.split_at(idx);
        let narrowed = narrow_models(ctx, head);
        return descend(Level::Atom, &narrowed, head, Level::Model, rest, word, command);
    }

    let seed = word.strip_prefix('#').unwrap_or(word);
    let mut models: Vec<&Arc<Model>> = ctx.models().iter().collect();
    models.sort_by(|a, b| a.id.natural_cmp(&b.id));

    let mut completions = Vec::new();
    let mut info = Vec::new();
    if has_separator(seed) {
        let (former, sep, typed) = rsplit_spec(seed);
        let existing = ModelSpec::parse(former);
        if !ctx.models().iter().any(|m| existing.contains(m)) {
            return listing(word, command, Vec::new(), Vec::new(), Level::Model);
        }
        for model in models {
            let id = model.id.to_string();
            if id.starts_with(typed) && !existing.contains(model) {
                completions.push(format!("#{}{}{}", former, sep, id));
                info.push(colored(&format!("...{}", model.name), "green"));
            }
        }
    } else {
        let prefix = format!("#{}", seed);
        for model in models {
            let spec = model.id.spec();
            if spec.starts_with(&prefix) {
                completions.push(spec);
                info.push(colored(&model.name, "green"));
            }
        }
    }
    listing(word, command, completions, info, Level::Model)
}

fn narrow_models(ctx: &Context, head: &str) -> Context {
    let spec = ModelSpec::parse(head.strip_prefix('#').unwrap_or(head));
    ctx.with_models(spec.filter(ctx.models()))
}

fn chain_level(ctx: &Context, word: &str, command: Option<&str>) -> CompletionState {
    let body = word.strip_prefix('/').unwrap_or(word);
    let head_len = word.len() - body.len();

    if let Some((chain_part, residue_part)) = body.split_once(':') {
        let residues = ResidueSpec::parse(residue_part);
        if !residue_part.contains('@') && !residues.is_empty() {
            return sequence_view(ctx, &ChainSpec::parse(chain_part), &residues, word, command);
        }
        let (head, rest) = word.split_at(head_len + chain_part.len());
        return descend(Level::Residue, ctx, head, Level::Chain, rest, word, command);
    }
    if let Some((chain_part, _)) = body.split_once('@') {
        let (head, rest) = word.split_at(head_len + chain_part.len());
        return descend(Level::Atom, ctx, head, Level::Chain, rest, word, command);
    }

    let chains: Vec<&Chain> = ctx.models().iter().flat_map(|m| m.chains.iter()).collect();
    // candidate -> description
    let mut found: BTreeMap<String, Option<String>> = BTreeMap::new();
    if has_separator(body) {
        let (former, sep, typed) = rsplit_spec(body);
        let existing = ChainSpec::parse(former);
        if !chains.iter().any(|c| existing.contains(c)) {
            return listing(word, command, Vec::new(), Vec::new(), Level::Chain);
        }
        for chain in &chains {
            if chain.chain_id.to_string().starts_with(typed) && !existing.contains(chain) {
                found
                    .entry(format!("/{}{}{}", former, sep, chain.chain_id))
                    .or_insert(None);
            }
        }
    } else {
        for chain in &chains {
            if chain.chain_id.to_string().starts_with(body) {
                let entry = found.entry(format!("/{}", chain.chain_id)).or_insert(None);
                if entry.is_none() {
                    *entry = chain.description.clone();
                }
            }
        }
    }

    let mut completions = Vec::with_capacity(found.len());
    let mut info = Vec::with_capacity(found.len());
    for (candidate, description) in found {
        completions.push(candidate);
        info.push(match description {
            Some(d) => colored(&d, "green"),
            None => type_label("chain ID"),
        });
    }
    listing(word, command, completions, info, Level::Chain)
}

fn residue_level(ctx: &Context, word: &str, command: Option<&str>) -> CompletionState {
    let body = word.strip_prefix(':').unwrap_or(word);
    if let Some(idx) = word.find('@') {
        let (head, rest) = word.split_at(idx);
        return descend(Level::Atom, ctx, head, Level::Residue, rest, word, command);
    }

    let nonstandard: BTreeSet<&str> = ctx
        .models()
        .iter()
        .flat_map(|m| m.nonstandard_residue_names.iter())
        .map(String::as_str)
        .filter(|name| name.starts_with(body))
        .collect();

    let mut completions = Vec::new();
    let mut info = Vec::new();
    for name in nonstandard {
        completions.push(format!(":{}", name));
        info.push(type_label("residue"));
    }
    for aa in AMINO_ACIDS.iter().filter(|aa| aa.starts_with(body)) {
        completions.push(format!(":{}", aa));
        info.push(match amino_acid_label(aa) {
            Some(label) => colored(&label, "green"),
            None => type_label("amino acid"),
        });
    }
    listing(word, command, completions, info, Level::Residue)
}

fn atom_level(word: &str, command: Option<&str>) -> CompletionState {
    let body = word.strip_prefix('@').unwrap_or(word);
    let completions: Vec<String> = ATOM_NAMES
        .iter()
        .filter(|a| a.starts_with(body))
        .map(|a| format!("@{}", a))
        .collect();
    let info = vec![type_label("atom"); completions.len()];
    listing(word, command, completions, info, Level::Atom)
}

/// One pseudo-candidate per residue around the last typed residue number
///
/// The first chain selected by `chains` is shown. Long chains are cut to a
/// window of `residue_window` residues on each side of the target.
fn sequence_view(
    ctx: &Context,
    chains: &ChainSpec,
    residues: &ResidueSpec,
    word: &str,
    command: Option<&str>,
) -> CompletionState {
    let kind = "chain,residue";
    let nothing = || CompletionState::new(word, Vec::new(), command.map(str::to_string)).with_kind(kind);

    let Some(chain) = ctx
        .models()
        .iter()
        .flat_map(|m| m.chains.iter())
        .find(|c| chains.contains(c))
    else {
        return nothing();
    };
    let Some(last) = residues.last_index() else {
        return nothing();
    };
    let n = chain.residues.len();
    let target = match last
        .checked_sub(chain.numbering_start)
        .and_then(|offset| usize::try_from(offset).ok())
    {
        Some(idx) if idx < n => idx,
        _ => return nothing(),
    };

    let window = ctx.config().residue_window;
    let (start, stop) = if n > window.saturating_mul(2) {
        (target.saturating_sub(window), target.saturating_add(window).min(n))
    } else {
        (0, n)
    };
    let actions: Vec<Action> = (start..stop)
        .map(|i| match &chain.residues[i] {
            Some(res) => Action::Residue(res.clone()),
            None => Action::MissingResidue {
                number: chain.numbering_start + i as i64,
                code: chain.character_at(i).unwrap_or('X'),
            },
        })
        .collect();
    let info = actions.iter().map(Action::info).collect();
    CompletionState::new(word, vec![String::new(); actions.len()], command.map(str::to_string))
        .with_info(info)
        .with_actions(actions)
        .with_kind(kind)
        .with_index_start(target - start)
}

fn listing(
    word: &str,
    command: Option<&str>,
    completions: Vec<String>,
    info: Vec<String>,
    level: Level,
) -> CompletionState {
    CompletionState::new(word, completions, command.map(str::to_string))
        .with_info(info)
        .with_kind(level.tag())
}
