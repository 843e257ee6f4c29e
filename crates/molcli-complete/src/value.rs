//! Argument value completion
//!
//! Dispatches on the declared [`ArgType`] of the argument being typed.
//! `None` means the type has nothing to offer here and the caller should
//! try its next source. An empty `Some` means the word has the shape of an
//! object specifier but addresses nothing, and the caller should stop.

use molcli_cmd::{ArgType, SpecKind};
use molcli_color::{is_hex_color, ColorRamp, COLORMAP_NAMES};

use crate::action::Action;
use crate::context::{Context, EntityFilter};
use crate::entity::{complete_entity, Level};
use crate::markup::{italic, swatch, type_label};
use crate::path::complete_path;
use crate::state::CompletionState;

const BOOL_VALUES: [&str; 2] = ["true", "false"];
const ON_OFF_VALUES: [&str; 2] = ["on", "off"];
const AXIS_VALUES: [&str; 6] = ["x", "y", "z", "-x", "-y", "-z"];
const VALUE_TYPES: [&str; 8] = [
    "int8", "uint8", "int16", "uint16", "int32", "uint32", "float32", "float64",
];

/// Drawing target letters and what they stand for
const TARGET_FLAGS: [(char, &str); 7] = [
    ('a', "atoms"),
    ('c', "cartoon"),
    ('s', "surfaces"),
    ('b', "bonds"),
    ('p', "pseudobonds"),
    ('r', "rings"),
    ('m', "models"),
];

/// Operators of the selector algebra
const SELECTOR_OPERATORS: [char; 3] = ['&', '|', '~'];

/// Resolves value candidates for one command
#[derive(Debug, Clone, Copy)]
pub struct ValueResolver<'a> {
    ctx: &'a Context,
    command: Option<&'a str>,
}

impl<'a> ValueResolver<'a> {
    /// Create a resolver for values of `command`
    pub fn new(ctx: &'a Context, command: Option<&'a str>) -> Self {
        ValueResolver { ctx, command }
    }

    /// Candidates for `word` typed as a value of type `arg`
    ///
    /// A lone candidate equal to the typed text is dropped.
    pub fn resolve(&self, arg: &ArgType, word: &str) -> Option<CompletionState> {
        let state = self.dispatch(arg, word)?;
        let typed = state.text().to_string();
        let state = state.collapse_singleton(&typed);
        if state.is_empty() && !is_entity(arg, word) {
            return None;
        }
        Some(state)
    }

    fn dispatch(&self, arg: &ArgType, word: &str) -> Option<CompletionState> {
        match arg {
            ArgType::NoArg | ArgType::Int | ArgType::Float | ArgType::Text => None,
            ArgType::Enum(values) => Some(self.values(arg, values, word, "enum")),
            ArgType::DynamicEnum(supplier) => Some(self.values(arg, &supplier.values(), word, "enum")),
            ArgType::Bool => Some(self.values(arg, &BOOL_VALUES, word, "boolean")),
            ArgType::OnOff => Some(self.values(arg, &ON_OFF_VALUES, word, "on/off")),
            ArgType::Axis => Some(self.values(arg, &AXIS_VALUES, word, "axis")),
            ArgType::ValueType => Some(self.values(arg, &VALUE_TYPES, word, "value type")),
            ArgType::ListOf(inner) => {
                let segment = word.rsplit(',').next().unwrap_or(word);
                self.resolve(inner, segment)
                    .map(|state| state.with_keyword_type(arg.kind()))
            }
            ArgType::Color => Some(self.color(arg, word)),
            ArgType::FilePath(_) => self.file_path(arg, word),
            ArgType::TargetFlags => self.target_flags(arg, word),
            ArgType::Colormap => Some(self.colormap(arg, word)),
            ArgType::Or(branches) => self.any_of(arg, branches, word),
            ArgType::Spec(kind) => self.spec(*kind, word),
        }
    }

    fn state(&self, arg: &ArgType, text: &str, completions: Vec<String>, info: Vec<String>) -> CompletionState {
        CompletionState::new(text, completions, self.command.map(str::to_string))
            .with_info(info)
            .with_kind("keyword-value")
            .with_keyword_type(arg.kind())
    }

    fn values<S: AsRef<str>>(&self, arg: &ArgType, values: &[S], word: &str, label: &str) -> CompletionState {
        let completions: Vec<String> = values
            .iter()
            .filter_map(|v| {
                let v: &str = v.as_ref();
                v.starts_with(word).then(|| v.to_string())
            })
            .collect();
        let info = vec![type_label(label); completions.len()];
        self.state(arg, word, completions, info)
    }

    fn color(&self, arg: &ArgType, word: &str) -> CompletionState {
        let history = self.ctx.pick_history().colors();
        if word.is_empty() {
            let mut completions = vec![String::new()];
            let mut info = vec![italic("Select a color ...")];
            let mut actions = vec![Action::SelectColor];
            for color in history {
                completions.push(color.to_string());
                info.push(swatch(color));
                actions.push(Action::None);
            }
            return self.state(arg, word, completions, info).with_actions(actions);
        }
        if word.starts_with('#') {
            let lowered = word.to_ascii_lowercase();
            let mut completions: Vec<String> = history
                .iter()
                .filter(|c| c.to_ascii_lowercase().starts_with(&lowered))
                .map(|c| c.to_string())
                .collect();
            if completions.is_empty() && is_hex_color(word) {
                completions.push(word.to_string());
            }
            let info = completions.iter().map(|c| swatch(c)).collect();
            return self.state(arg, word, completions, info);
        }
        let (completions, info) = self
            .ctx
            .colors()
            .starting_with(word)
            .map(|(name, color)| (name.to_string(), swatch(&color.to_hex())))
            .unzip();
        self.state(arg, word, completions, info)
    }

    fn file_path(&self, arg: &ArgType, word: &str) -> Option<CompletionState> {
        if !word.is_empty() {
            let limit = self.ctx.config().path_limit;
            return complete_path(word, self.command, limit).map(|s| s.with_keyword_type(arg.kind()));
        }
        let mut paths: Vec<String> = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.to_string_lossy().into_owned());
        }
        paths.extend(self.ctx.pick_history().paths().into_iter().map(str::to_string));

        let mut completions = vec![String::new()];
        let mut info = vec![italic("Browse ...")];
        let mut actions = vec![Action::SelectFile {
            mode: self.ctx.file_open_mode(arg),
        }];
        for path in paths {
            completions.push(path);
            info.push(type_label("path"));
            actions.push(Action::None);
        }
        Some(self.state(arg, word, completions, info).with_actions(actions))
    }

    fn target_flags(&self, arg: &ArgType, word: &str) -> Option<CompletionState> {
        if !word.chars().all(|c| TARGET_FLAGS.iter().any(|(f, _)| *f == c)) {
            return None;
        }
        let (completions, info) = TARGET_FLAGS
            .iter()
            .filter(|(flag, _)| !word.contains(*flag))
            .map(|(flag, name)| (format!("{}{}", word, flag), type_label(name)))
            .unzip();
        Some(self.state(arg, word, completions, info))
    }

    fn colormap(&self, arg: &ArgType, word: &str) -> CompletionState {
        let (completions, info) = COLORMAP_NAMES
            .iter()
            .filter(|name| name.starts_with(word))
            .map(|name| {
                let gradient = match ColorRamp::preset(name) {
                    Ok(ramp) => ramp.sample(5).iter().map(|c| swatch(&c.to_hex())).collect::<String>(),
                    Err(_) => type_label("colormap"),
                };
                (name.to_string(), gradient)
            })
            .unzip();
        self.state(arg, word, completions, info)
    }

    fn any_of(&self, arg: &ArgType, branches: &[ArgType], word: &str) -> Option<CompletionState> {
        let mut merged: Option<CompletionState> = None;
        for branch in branches {
            let Some(state) = self.resolve(branch, word) else {
                continue;
            };
            let state = state.anchored(word);
            match merged.as_mut() {
                Some(m) => m.append(state),
                None => merged = Some(state),
            }
        }
        merged
            .filter(|m| !m.is_empty())
            .map(|m| m.with_kind("keyword-value").with_keyword_type(arg.kind()))
    }

    fn spec(&self, kind: SpecKind, word: &str) -> Option<CompletionState> {
        let filter = if kind.is_density_map() {
            EntityFilter::Volumes
        } else if kind.is_surface() {
            EntityFilter::Surfaces
        } else {
            EntityFilter::All
        };
        if let Some(level) = entity_level(word) {
            return Some(self.entity(level, word, filter, kind));
        }
        if !kind.allows_selectors() {
            return None;
        }

        let segment = word.rsplit(&SELECTOR_OPERATORS[..]).next().unwrap_or(word);
        if let Some(level) = segment.chars().next().and_then(Level::from_sigil) {
            return Some(self.entity(level, segment, filter, kind));
        }
        let completions: Vec<String> = self
            .ctx
            .selectors()
            .iter()
            .filter(|s| s.starts_with(segment))
            .cloned()
            .collect();
        let info = vec![type_label("selector"); completions.len()];
        Some(
            CompletionState::new(segment, completions, self.command.map(str::to_string))
                .with_info(info)
                .with_kind("selector")
                .with_keyword_type(ArgType::Spec(kind).kind()),
        )
    }

    fn entity(&self, level: Level, word: &str, filter: EntityFilter, kind: SpecKind) -> CompletionState {
        complete_entity(level, self.ctx, word, self.command, filter)
            .with_keyword_type(ArgType::Spec(kind).kind())
    }
}

/// Entity level addressed by a word, `Model` for an empty word
fn entity_level(word: &str) -> Option<Level> {
    match word.chars().next() {
        None => Some(Level::Model),
        Some(c) => Level::from_sigil(c),
    }
}

/// True if `word` is completed as an object specifier for `arg`
fn is_entity(arg: &ArgType, word: &str) -> bool {
    match arg {
        ArgType::Spec(kind) => {
            entity_level(word).is_some()
                || (kind.allows_selectors()
                    && word
                        .rsplit(&SELECTOR_OPERATORS[..])
                        .next()
                        .and_then(|s| s.chars().next())
                        .and_then(Level::from_sigil)
                        .is_some())
        }
        _ => false,
    }
}
