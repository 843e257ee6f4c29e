//! Completion results
//!
//! A [`CompletionState`] is built fresh for every request and never mutated
//! after it is returned. Candidate strings, annotations and actions are kept
//! in three parallel lists of equal length.

use molcli_cmd::ArgKind;

use crate::action::Action;

/// Candidates offered for the word under the cursor
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionState {
    text: String,
    completions: Vec<String>,
    command: Option<String>,
    info: Vec<String>,
    action: Vec<Action>,
    kind: String,
    keyword_type: Option<ArgKind>,
    index_start: usize,
}

impl CompletionState {
    /// Create a state with empty annotations and no actions
    pub fn new(text: impl Into<String>, completions: Vec<String>, command: Option<String>) -> Self {
        let n = completions.len();
        CompletionState {
            text: text.into(),
            completions,
            command,
            info: vec![String::new(); n],
            action: vec![Action::None; n],
            kind: String::new(),
            keyword_type: None,
            index_start: 0,
        }
    }

    /// A state with nothing to complete
    pub fn empty() -> Self {
        Self::new("", Vec::new(), None)
    }

    /// Set per-candidate annotations
    ///
    /// # Panics
    ///
    /// Panics if `info` does not have one entry per candidate.
    pub fn with_info(mut self, info: Vec<String>) -> Self {
        assert_eq!(
            info.len(),
            self.completions.len(),
            "info must have one entry per completion"
        );
        self.info = info;
        self
    }

    /// Set per-candidate actions
    ///
    /// # Panics
    ///
    /// Panics if `action` does not have one entry per candidate.
    pub fn with_actions(mut self, action: Vec<Action>) -> Self {
        assert_eq!(
            action.len(),
            self.completions.len(),
            "action must have one entry per completion"
        );
        self.action = action;
        self
    }

    /// Set the candidate kind tag
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Record the argument type that produced the candidates
    pub fn with_keyword_type(mut self, kind: ArgKind) -> Self {
        self.keyword_type = Some(kind);
        self
    }

    /// Set the initially highlighted candidate
    pub fn with_index_start(mut self, index: usize) -> Self {
        self.index_start = index;
        self
    }

    /// Set the resolved command name
    pub fn with_command(mut self, command: Option<String>) -> Self {
        self.command = command;
        self
    }

    /// Text already typed for the completed segment
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Candidate replacement strings, in display order
    pub fn completions(&self) -> &[String] {
        &self.completions
    }

    /// Fully resolved command name, if any
    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    /// Per-candidate annotations (may contain markup)
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Per-candidate actions
    pub fn actions(&self) -> &[Action] {
        &self.action
    }

    /// Kind tag, e.g. `model`, `model,chain`, `keyword-value`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Argument type that produced value candidates
    pub fn keyword_type(&self) -> Option<ArgKind> {
        self.keyword_type
    }

    /// Initially highlighted candidate
    pub fn index_start(&self) -> usize {
        self.index_start
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.completions.len()
    }

    /// True if there is nothing to offer
    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Re-anchor a child level's result under its parent
    ///
    /// Every non-empty candidate gets `head` prepended and the kind becomes
    /// `parent_kind,child_kind`. Empty pseudo-candidates (sequence view
    /// entries) are left as they are.
    pub fn prefixed(mut self, head: &str, parent_kind: &str, text: impl Into<String>) -> Self {
        for completion in &mut self.completions {
            if !completion.is_empty() {
                completion.insert_str(0, head);
            }
        }
        self.kind = if self.kind.is_empty() {
            parent_kind.to_string()
        } else {
            format!("{},{}", parent_kind, self.kind)
        };
        self.text = text.into();
        self
    }

    /// Append the candidates of `other`, keeping this state's metadata
    pub fn append(&mut self, other: CompletionState) {
        self.completions.extend(other.completions);
        self.info.extend(other.info);
        self.action.extend(other.action);
    }

    /// Widen the replaced text to `text`, an extension of the current text
    /// to the left
    ///
    /// The extra leading part is prepended to every non-empty candidate, so
    /// inserting a candidate over `text` gives the same line as before.
    /// Nothing changes if `text` does not end with the current text.
    pub fn anchored(mut self, text: &str) -> Self {
        if let Some(head) = text.strip_suffix(self.text.as_str()) {
            if !head.is_empty() {
                for completion in &mut self.completions {
                    if !completion.is_empty() {
                        completion.insert_str(0, head);
                    }
                }
            }
            self.text = text.to_string();
        }
        self
    }

    /// Drop a lone candidate that equals what was already typed
    ///
    /// Candidates carrying an effectful action (color or file browsing) are
    /// kept even when their text matches.
    pub fn collapse_singleton(mut self, typed: &str) -> Self {
        let effectful = self.action.first().is_some_and(Action::is_effectful);
        if self.completions.len() == 1 && self.completions[0] == typed && !effectful {
            self.completions.clear();
            self.info.clear();
            self.action.clear();
        }
        self
    }

    /// Untyped remainder of the candidate at `index`
    ///
    /// Returns `None` if the candidate does not extend the typed text.
    pub fn suffix(&self, index: usize) -> Option<&str> {
        self.completions
            .get(index)
            .and_then(|c| c.strip_prefix(self.text.as_str()))
    }
}

impl Default for CompletionState {
    fn default() -> Self {
        Self::empty()
    }
}
