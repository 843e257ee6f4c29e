//! File path completion
//!
//! Lists direct children of a directory, or the entries of the parent
//! directory that start with a partially typed file name. Never recurses.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::markup::type_label;
use crate::state::CompletionState;

/// Complete a partially typed path
///
/// - `dir/` lists the children of `dir`
/// - `dir` (an existing directory) lists children prefixed with a separator
/// - `dir/na` lists entries of `dir` starting with `na`
/// - `dir/.` lists the hidden entries of `dir`
///
/// Hidden entries are skipped unless the typed name starts with `.`. At most
/// `limit` entries are returned. Returns `None` when the word is empty, names
/// an existing file, or nothing matches.
pub fn complete_path(last_word: &str, command: Option<&str>, limit: usize) -> Option<CompletionState> {
    if last_word.is_empty() {
        return None;
    }
    let word = last_word.trim_start_matches(|c: char| c == '\'' || c == '"');

    if word.ends_with("/.") || word.ends_with("\\.") {
        let dir = absolute(&word[..word.len() - 1])?;
        if !dir.is_dir() {
            return None;
        }
        let names = list_dir(&dir, ".", true, limit);
        return path_state(".", names, command);
    }

    let path = absolute(word)?;
    if path.is_dir() {
        let sep = if word.ends_with('/') || word.ends_with('\\') {
            ""
        } else if word.contains('\\') {
            "\\"
        } else {
            "/"
        };
        let names = list_dir(&path, "", false, limit)
            .into_iter()
            .map(|name| format!("{}{}", sep, name))
            .collect();
        return path_state("", names, command);
    }
    if path.exists() {
        return None;
    }

    let parent = path.parent()?;
    if !parent.is_dir() {
        return None;
    }
    let partial = word.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(word);
    let names = list_dir(parent, partial, partial.starts_with('.'), limit);
    path_state(partial, names, command)
}

fn path_state(text: &str, names: Vec<String>, command: Option<&str>) -> Option<CompletionState> {
    if names.is_empty() {
        return None;
    }
    let info = vec![type_label("path"); names.len()];
    Some(
        CompletionState::new(text, names, command.map(str::to_string))
            .with_info(info)
            .with_kind("path"),
    )
}

/// Sorted names of `dir` starting with `prefix`
fn list_dir(dir: &Path, prefix: &str, include_hidden: bool, limit: usize) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let mut names: Vec<String> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with(prefix))
        .filter(|name| include_hidden || !name.starts_with('.'))
        .collect();
    names.sort();
    names.truncate(limit);
    names
}

/// Expand `~` and resolve against the working directory
fn absolute(word: &str) -> Option<PathBuf> {
    let expanded = if word == "~" {
        dirs::home_dir()?
    } else if let Some(rest) = word.strip_prefix("~/") {
        dirs::home_dir()?.join(rest)
    } else {
        PathBuf::from(word)
    };
    if expanded.is_absolute() {
        Some(expanded)
    } else {
        env::current_dir().ok().map(|cwd| cwd.join(expanded))
    }
}
