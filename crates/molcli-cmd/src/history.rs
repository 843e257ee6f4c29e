//! Command history tracking
//!
//! Stores submitted command lines for recall, navigation and inline
//! suggestions. Nothing is persisted.

use std::collections::VecDeque;

/// Default number of lines kept
const DEFAULT_MAX_HISTORY: usize = 120;

/// Command history for recall and navigation
#[derive(Debug, Clone)]
pub struct CommandHistory {
    /// Submitted lines (most recent at back)
    lines: VecDeque<String>,
    /// Maximum number of lines to store
    max_size: usize,
    /// Current position for navigation (None = at end)
    position: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    /// Create a new empty history
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new history with specified capacity
    pub fn with_capacity(max_size: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_size.min(1024)),
            max_size: max_size.max(1),
            position: None,
        }
    }

    /// Add a line to history
    ///
    /// An existing identical line is moved to the end instead of duplicated.
    /// Resets navigation position to the end.
    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        if line.trim().is_empty() {
            return;
        }
        if let Some(idx) = self.lines.iter().position(|l| *l == line) {
            self.lines.remove(idx);
        }
        while self.lines.len() >= self.max_size {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
        self.position = None;
    }

    /// Get the previous line in history (going back)
    pub fn previous(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }

        let new_pos = match self.position {
            None => self.lines.len() - 1,
            Some(0) => 0,
            Some(p) => p - 1,
        };

        self.position = Some(new_pos);
        self.lines.get(new_pos).map(|s| s.as_str())
    }

    /// Get the next line in history (going forward)
    pub fn next(&mut self) -> Option<&str> {
        match self.position {
            None => None,
            Some(p) if p + 1 >= self.lines.len() => {
                self.position = None;
                None
            }
            Some(p) => {
                self.position = Some(p + 1);
                self.lines.get(p + 1).map(|s| s.as_str())
            }
        }
    }

    /// Reset navigation position to end
    pub fn reset_position(&mut self) {
        self.position = None;
    }

    /// Untyped remainder of the most recent line starting with `prefix`
    ///
    /// Returns `None` for an empty prefix or when nothing longer matches.
    pub fn suggest(&self, prefix: &str) -> Option<&str> {
        if prefix.is_empty() {
            return None;
        }
        self.lines
            .iter()
            .rev()
            .find(|l| l.len() > prefix.len() && l.starts_with(prefix))
            .map(|l| &l[prefix.len()..])
    }

    /// Get the number of lines in history
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.lines.clear();
        self.position = None;
    }

    /// Iterate over all lines (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_navigate() {
        let mut history = CommandHistory::new();

        history.push("cmd1");
        history.push("cmd2");
        history.push("cmd3");

        assert_eq!(history.len(), 3);
        assert_eq!(history.previous(), Some("cmd3"));
        assert_eq!(history.previous(), Some("cmd2"));
        assert_eq!(history.previous(), Some("cmd1"));
        assert_eq!(history.previous(), Some("cmd1"));
        assert_eq!(history.next(), Some("cmd2"));
        assert_eq!(history.next(), Some("cmd3"));
        assert_eq!(history.next(), None);
    }

    #[test]
    fn test_push_moves_duplicate_to_end() {
        let mut history = CommandHistory::new();
        history.push("open 1abc");
        history.push("cartoon");
        history.push("open 1abc");
        let lines: Vec<&str> = history.iter().collect();
        assert_eq!(lines, vec!["cartoon", "open 1abc"]);
    }

    #[test]
    fn test_capacity() {
        let mut history = CommandHistory::with_capacity(2);
        history.push("a");
        history.push("b");
        history.push("c");
        let lines: Vec<&str> = history.iter().collect();
        assert_eq!(lines, vec!["b", "c"]);
    }

    #[test]
    fn test_blank_ignored() {
        let mut history = CommandHistory::new();
        history.push("   ");
        assert!(history.is_empty());
    }

    #[test]
    fn test_suggest_most_recent() {
        let mut history = CommandHistory::new();
        history.push("color red");
        history.push("color #1 blue");
        history.push("cartoon");
        assert_eq!(history.suggest("col"), Some("or #1 blue"));
        assert_eq!(history.suggest("color r"), Some("ed"));
        assert_eq!(history.suggest("cartoon"), None);
        assert_eq!(history.suggest(""), None);
        assert_eq!(history.suggest("zoom"), None);
    }
}
