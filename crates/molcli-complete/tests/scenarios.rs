//! End-to-end completion scenarios

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use molcli_cmd::prelude::*;
use molcli_complete::prelude::*;
use molcli_complete::{complete_model, complete_path, complete_residue, ValueResolver};
use molcli_mol::{Chain, Model, ModelId};
use molcli_select::ModelSpec;
use tempfile::TempDir;

fn protein_models() -> Context {
    Context::new()
        .with_model(
            Model::new(ModelId::new(&[1]), "protein A")
                .with_chain(Chain::new('A'))
                .with_chain(Chain::new('B'))
                .with_nonstandard_residue("ATP"),
        )
        .with_model(Model::new(ModelId::new(&[2]), "protein B").with_chain(Chain::new('A')))
}

fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(
        "cmd",
        CommandDesc::new()
            .required("objects", ArgType::Spec(SpecKind::Models))
            .keyword("kw", ArgType::Text),
    );
    registry.register(
        "style",
        CommandDesc::new()
            .required("objects", ArgType::Spec(SpecKind::Objects))
            .optional("style", ArgType::enum_of(["stick", "sphere", "ball"]))
            .keyword("dashes", ArgType::Int)
            .keyword("ring_fill", ArgType::OnOff),
    );
    registry
}

fn assert_parallel(state: &CompletionState) {
    assert_eq!(state.info().len(), state.completions().len());
    assert_eq!(state.actions().len(), state.completions().len());
}

#[test]
fn test_parallel_lists_everywhere() {
    let ctx = protein_models().with_registry(Arc::new(registry()));
    let mut completer = Completer::new();
    for line in [
        "", "s", "style", "style ", "style #", "style #1/", "style #1 s", "style #1 stick r",
        "style #1 ring_fill ", "cmd kw=value ", "cmd #1:A", "nothing here",
    ] {
        assert_parallel(&completer.complete(&ctx, line));
    }
}

#[test]
fn test_idempotent() {
    let ctx = protein_models().with_registry(Arc::new(registry()));
    let mut completer = Completer::new();
    for line in ["st", "style #1/", "style #1 ", "cmd kw=value "] {
        let first = completer.complete(&ctx, line);
        let second = completer.complete(&ctx, line);
        assert_eq!(first, second, "line {:?}", line);
    }
}

#[test]
fn test_singleton_collapse() {
    let ctx = protein_models();
    let resolver = ValueResolver::new(&ctx, None);
    let arg = ArgType::enum_of(["stick", "sphere"]);
    assert!(resolver.resolve(&arg, "stick").is_none());
    assert_eq!(resolver.resolve(&arg, "st").unwrap().completions(), &["stick"]);
}

#[test]
fn test_model_spec_filter() {
    let ids: Vec<Vec<u32>> = vec![vec![1], vec![2], vec![3], vec![4], vec![5], vec![6], vec![2, 1], vec![2, 2]];
    let models: Vec<Model> = ids.iter().map(|id| Model::new(ModelId::new(id), "")).collect();
    let picked: Vec<String> = ModelSpec::parse("1,3-5,2.1")
        .filter(&models)
        .iter()
        .map(|m| m.id.to_string())
        .collect();
    assert_eq!(picked, vec!["1", "3", "4", "5", "2.1"]);
}

#[test]
fn test_natural_sort() {
    let ctx = Context::new()
        .with_model(Model::new(ModelId::new(&[2]), "b"))
        .with_model(Model::new(ModelId::new(&[1, 1]), "c"))
        .with_model(Model::new(ModelId::new(&[1]), "a"));
    let state = complete_model(&ctx, "#", None, EntityFilter::All);
    assert_eq!(state.completions(), &["#1", "#2", "#1.1"]);
}

#[test]
fn test_model_addressing() {
    let ctx = protein_models();
    let state = complete_model(&ctx, "#1", Some("show"), EntityFilter::All);
    assert_eq!(state.completions(), &["#1"]);
    let state = complete_model(&ctx, "#", Some("show"), EntityFilter::All);
    assert_eq!(state.completions(), &["#1", "#2"]);
}

#[test]
fn test_chain_drill_down() {
    let ctx = protein_models();
    let state = complete_model(&ctx, "#1/", None, EntityFilter::All);
    assert_eq!(state.completions(), &["#1/A", "#1/B"]);
}

#[test]
fn test_residue_filtering() {
    let ctx = protein_models();
    let state = complete_residue(&ctx, ":A", None, EntityFilter::All);
    for expected in [":ATP", ":Ala", ":Arg", ":Asn", ":Asp"] {
        assert!(state.completions().iter().any(|c| c == expected), "missing {}", expected);
    }
    let state = complete_residue(&ctx, ":L", None, EntityFilter::All);
    assert!(!state.completions().iter().any(|c| c == ":ATP"));
}

#[test]
fn test_path_completion_boundary() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("foo.txt"), "").unwrap();
    let query = format!("{}/", dir.path().display());
    let state = complete_path(&query, None, 64).unwrap();
    assert_eq!(state.completions(), &["foo.txt"]);

    fs::write(dir.path().join(".secret"), "").unwrap();
    let state = complete_path(&query, None, 64).unwrap();
    assert_eq!(state.completions(), &["foo.txt"]);
    let state = complete_path(&format!("{}.s", query), None, 64).unwrap();
    assert_eq!(state.completions(), &[".secret"]);
}

#[test]
fn test_path_fallback_from_command_line() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("foo.txt"), "").unwrap();
    let ctx = protein_models().with_registry(Arc::new(registry()));
    let line = format!("style #1 stick {}/f", dir.path().display());
    let state = Completer::new().complete(&ctx, &line);
    assert_eq!(state.completions(), &["foo.txt"]);
    assert_eq!(state.kind(), "path");
}

#[test]
fn test_insufficient_arguments() {
    let ctx = protein_models().with_registry(Arc::new(registry()));
    let state = Completer::new().complete(&ctx, "cmd kw=value ");
    assert_eq!(state.completions(), &[""]);
    assert_eq!(state.actions(), &[Action::TypeError]);
    assert!(state.info()[0].contains("color=\"red\""));
    assert_eq!(state.kind(), "error");
}

#[test]
fn test_keywords_after_required() {
    let ctx = protein_models().with_registry(Arc::new(registry()));
    let mut completer = Completer::new();
    let state = completer.complete(&ctx, "style #1 stick ");
    assert_eq!(state.completions(), &["dashes", "ring_fill"]);

    let state = completer.complete(&ctx, "style #1 ring_fill o");
    assert_eq!(state.completions(), &["on", "off"]);

    // enum value first, keyword names only once nothing matches
    let state = completer.complete(&ctx, "style #1 s");
    assert_eq!(state.completions(), &["stick", "sphere"]);
}

#[test]
fn test_unresolvable_memoized_until_cleared() {
    static LOADS: AtomicUsize = AtomicUsize::new(0);
    let mut registry = registry();
    registry.register_deferred("blast", || {
        LOADS.fetch_add(1, Ordering::SeqCst);
        Err(CmdError::unavailable("blast", "bundle failed to load"))
    });
    let ctx = protein_models().with_registry(Arc::new(registry));
    let mut completer = Completer::new();

    for _ in 0..3 {
        let state = completer.complete(&ctx, "blast #");
        assert!(state.is_empty());
        assert_eq!(state.command(), Some("blast"));
    }
    assert_eq!(LOADS.load(Ordering::SeqCst), 1);

    completer.clear_cache();
    completer.complete(&ctx, "blast #");
    assert_eq!(LOADS.load(Ordering::SeqCst), 2);
}

#[test]
fn test_config_from_json_drives_window() {
    let config = CompletionConfig::from_json(r#"{"residue_window": 2}"#).unwrap();
    let characters = "MKTAYIAKQR";
    let residues = characters
        .chars()
        .enumerate()
        .map(|(i, c)| Some(molcli_mol::Residue::new("ALA", i as i64 + 1, c)))
        .collect();
    let chain = Chain::new('A').with_residues(residues, characters).unwrap();
    let ctx = Context::new()
        .with_config(config)
        .with_model(Model::new(ModelId::new(&[1]), "p").with_chain(chain));
    let state = complete_model(&ctx, "#1/A:5", None, EntityFilter::All);
    assert_eq!(state.len(), 4);
    assert_eq!(state.index_start(), 2);
}
