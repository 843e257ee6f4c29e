//! Interactive completion prompt
//!
//! Wires the completion engine into a `rustyline` prompt over a small demo
//! session with two models and a handful of commands.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p molcli-complete --example complete_line
//! ```
//!
//! Press Tab to complete. Previously entered lines are suggested inline as
//! you type. `quit` or `exit` leaves the prompt.

use std::cell::RefCell;
use std::sync::Arc;

use molcli_cmd::prelude::*;
use molcli_cmd::CommandHistory;
use molcli_complete::{Completer, CompletionConfig, CompletionState, Context};
use molcli_mol::{Chain, FileSpec, Model, ModelId, Residue};
use rustyline::completion::{Completer as RlCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

/// Line editor helper backed by the completion engine
struct LineHelper {
    ctx: Context,
    completer: RefCell<Completer>,
    history: RefCell<CommandHistory>,
}

impl LineHelper {
    fn new(ctx: Context) -> Self {
        let history = ctx.config().command_history();
        LineHelper {
            ctx,
            completer: RefCell::new(Completer::new()),
            history: RefCell::new(history),
        }
    }

    fn record(&self, line: &str) {
        self.history.borrow_mut().push(line);
    }
}

impl RlCompleter for LineHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let state = self.completer.borrow_mut().complete(&self.ctx, &line[..pos]);
        let start = pos.saturating_sub(state.text().len());
        Ok((start, to_pairs(&state)))
    }
}

/// Candidates with a non-empty replacement, annotated with plain-text info
fn to_pairs(state: &CompletionState) -> Vec<Pair> {
    state
        .completions()
        .iter()
        .zip(state.info())
        .filter(|(completion, _)| !completion.is_empty())
        .map(|(completion, info)| {
            let info = strip_markup(info);
            Pair {
                display: if info.is_empty() {
                    completion.clone()
                } else {
                    format!("{}  {}", completion, info)
                },
                replacement: completion.clone(),
            }
        })
        .collect()
}

fn strip_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => plain.push(c),
            _ => {}
        }
    }
    plain.replace("&nbsp;", " ")
}

impl Hinter for LineHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.history.borrow().suggest(line).map(str::to_string)
    }
}

impl Highlighter for LineHelper {}

impl Validator for LineHelper {}

impl Helper for LineHelper {}

fn demo_context() -> Context {
    let mut registry = CommandRegistry::new();
    registry.register(
        "open",
        CommandDesc::new()
            .required("names", ArgType::FilePath(PathKind::OpenMany))
            .keyword("format", ArgType::enum_of(["pdb", "mmcif", "mrc"]))
            .synopsis("read structure or map files"),
    );
    registry.register(
        "color",
        CommandDesc::new()
            .required("objects", ArgType::Spec(SpecKind::Objects))
            .optional("color", ArgType::or([ArgType::Color, ArgType::enum_of(["byhetero", "bychain"])]))
            .optional("what", ArgType::TargetFlags)
            .keyword("what", ArgType::TargetFlags)
            .keyword("transparency", ArgType::Float)
            .synopsis("color specified items"),
    );
    registry.register(
        "cartoon",
        CommandDesc::new()
            .optional("objects", ArgType::Spec(SpecKind::Objects))
            .keyword("suppress_backbone_display", ArgType::Bool),
    );
    registry.register(
        "surface",
        CommandDesc::new()
            .optional("objects", ArgType::Spec(SpecKind::Objects))
            .keyword("colormap", ArgType::Colormap)
            .keyword("visible_patches", ArgType::Int),
    );
    registry.register("turn", CommandDesc::new().optional("axis", ArgType::Axis).optional("angle", ArgType::Float));
    registry.register("toolshed list", CommandDesc::new());
    registry.register("toolshed install", CommandDesc::new().required("name", ArgType::Text));
    registry.register_deferred("kvfinder", || Err(CmdError::unavailable("kvfinder", "bundle not installed")));
    if let Err(e) = registry.add_alias("rotate", "turn") {
        log::warn!("{}", e);
    }

    let sequence = "MKTAYIAKQRQISFVKSHFSRQ";
    let residues = sequence
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 5 {
                return None;
            }
            let name = molcli_mol::residue::one_to_three(c).unwrap_or("UNK").to_uppercase();
            let residue = Residue::new(name, i as i64 + 1, c);
            Some(if i < 10 { residue.helix() } else { residue })
        })
        .collect();
    let chain_a = match Chain::new('A').with_description("lysozyme").with_residues(residues, sequence) {
        Ok(chain) => chain,
        Err(e) => {
            log::warn!("{}", e);
            Chain::new('A')
        }
    };

    Context::new()
        .with_registry(Arc::new(registry))
        .with_config(CompletionConfig::new())
        .with_model(
            Model::new(ModelId::new(&[1]), "1abc")
                .with_chain(chain_a)
                .with_chain(Chain::new('B'))
                .with_nonstandard_residue("HEM"),
        )
        .with_model(Model::new(ModelId::new(&[2]), "emd_1234"))
        .with_model(Model::new(ModelId::new(&[2, 1]), "emd_1234 surface"))
        .with_selectors(["protein", "ligand", "helix", "strand"])
        .with_file_list(|| vec![FileSpec::new("1abc.pdb"), FileSpec::new("emd_1234.map")])
}

fn main() -> rustyline::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let helper = LineHelper::new(demo_context());
    let mut rl: Editor<LineHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline("molcli> ") {
            Ok(line) => {
                let cmd = line.trim();
                if cmd == "quit" || cmd == "exit" {
                    break;
                }
                if cmd.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(cmd);
                if let Some(helper) = rl.helper() {
                    helper.record(cmd);
                    if let Some(name) = cmd.split_whitespace().next() {
                        if let Some(tip) = helper.completer.borrow_mut().tooltip(&helper.ctx, name) {
                            println!("{}", strip_markup(&tip.replace("<br>", "\n")));
                        }
                    }
                }
                log::info!("Would run: {}", cmd);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                log::info!("EOF/interrupt received, exiting...");
                break;
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
    Ok(())
}
