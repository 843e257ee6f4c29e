//! Candidate actions
//!
//! Some candidates do more than insert text: they open a color or file
//! picker, jump to a residue number, or reopen a recent file. An [`Action`]
//! is plain data; the host runs it with [`Action::execute`] against its own
//! editing surface when the user commits the candidate.

use std::collections::VecDeque;
use std::ops::Range;

use molcli_cmd::PathKind;
use molcli_mol::residue::{one_to_three, title_case};
use molcli_mol::Residue;

use crate::context::Context;
use crate::markup::{bold, colored, italic, strike};

/// Mode of the file dialog opened by [`Action::SelectFile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileMode {
    /// Open one existing file
    Read,
    /// Open several existing files
    ReadMultiple,
    /// Choose a file to write
    Write,
    /// Choose a directory
    Directory,
}

impl FileMode {
    /// Short code: `r`, `rm`, `w` or `d`
    pub fn as_str(&self) -> &'static str {
        match self {
            FileMode::Read => "r",
            FileMode::ReadMultiple => "rm",
            FileMode::Write => "w",
            FileMode::Directory => "d",
        }
    }
}

impl From<PathKind> for FileMode {
    fn from(kind: PathKind) -> Self {
        match kind {
            PathKind::Open => FileMode::Read,
            PathKind::OpenMany => FileMode::ReadMultiple,
            PathKind::Save => FileMode::Write,
            PathKind::Directory => FileMode::Directory,
        }
    }
}

/// Behavior attached to a candidate
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    /// Plain text insertion
    #[default]
    None,
    /// Marks the "not enough arguments" pseudo-candidate
    TypeError,
    /// Open a color picker and insert the chosen color
    SelectColor,
    /// Open a file dialog and insert the chosen path(s)
    SelectFile { mode: FileMode },
    /// Replace the typed residue number with this residue's number
    Residue(Residue),
    /// Position of the sequence with no residue in the structure
    MissingResidue { number: i64, code: char },
    /// Clear the line and run the file's open command
    RecentFile { open_command: String },
}

impl Action {
    /// Annotation shown next to the candidate
    pub fn info(&self) -> String {
        match self {
            Action::None | Action::RecentFile { .. } => String::new(),
            Action::TypeError => colored("Not enough arguments", "red"),
            Action::SelectColor => italic("Select a color ..."),
            Action::SelectFile { .. } => italic("Browse ..."),
            Action::Residue(res) => {
                let secondary = if res.is_strand {
                    " \u{3b2}"
                } else if res.is_helix {
                    " \u{3b1}"
                } else {
                    ""
                };
                bold(&format!(
                    "{}: {} ({}){}",
                    res.number,
                    title_case(&res.name),
                    res.one_letter_code,
                    secondary
                ))
            }
            Action::MissingResidue { number, code } => strike(&format!(
                "{}: {} ({})",
                number,
                one_to_three(*code).unwrap_or("---"),
                code
            )),
        }
    }

    /// True if committing the candidate does more than insert its text
    pub fn is_effectful(&self) -> bool {
        matches!(
            self,
            Action::SelectColor
                | Action::SelectFile { .. }
                | Action::Residue(_)
                | Action::RecentFile { .. }
        )
    }

    /// Run the action against the host's editing surface
    ///
    /// Picked colors and paths are recorded in `history`.
    pub fn execute(&self, target: &mut dyn ActionTarget, ctx: &Context, history: &mut PickHistory) {
        match self {
            Action::None | Action::TypeError | Action::MissingResidue { .. } => {}
            Action::SelectColor => {
                if let Some(color) = target.pick_color() {
                    log::debug!("Picked color {}", color);
                    target.insert_text(&color);
                    history.record_color(color);
                }
            }
            Action::SelectFile { mode } => {
                if let Some(path) = target.pick_files(*mode) {
                    log::debug!("Picked path {} (mode {})", path, mode.as_str());
                    target.insert_text(&path);
                    history.record_path(path);
                }
            }
            Action::Residue(res) => {
                let Some(range) = typed_residue_range(target.text(), target.cursor()) else {
                    log::debug!("No residue number before cursor");
                    return;
                };
                target.replace_range(range, &res.number.to_string());
                target.close_popups();
            }
            Action::RecentFile { open_command } => {
                log::debug!("Reopening recent file: {}", open_command);
                target.set_text("");
                ctx.run_command(open_command);
            }
        }
    }
}

/// Byte range of the residue number typed just before `cursor`
///
/// Scans back to the nearest `,` `:` or `-`. Whitespace or the start of the
/// line ends the scan without a match.
fn typed_residue_range(text: &str, cursor: usize) -> Option<Range<usize>> {
    let bytes = text.as_bytes();
    let cursor = cursor.min(bytes.len());
    let mut pos = cursor.checked_sub(1)?;
    loop {
        match bytes[pos] {
            b',' | b':' | b'-' => return Some(pos + 1..cursor),
            b' ' | b'\t' | b'\n' => return None,
            _ if pos == 0 => return None,
            _ => pos -= 1,
        }
    }
}

/// Editing surface of the host
pub trait ActionTarget {
    /// Current line text
    fn text(&self) -> &str;

    /// Cursor position as a byte offset into [`text`](Self::text)
    fn cursor(&self) -> usize;

    /// Replace a byte range of the line and move the cursor after it
    fn replace_range(&mut self, range: Range<usize>, replacement: &str);

    /// Insert text at the cursor
    fn insert_text(&mut self, text: &str);

    /// Replace the whole line
    fn set_text(&mut self, text: &str);

    /// Ask the user for a color; `None` if cancelled
    fn pick_color(&mut self) -> Option<String>;

    /// Ask the user for one or more paths; several paths are space-joined
    fn pick_files(&mut self, mode: FileMode) -> Option<String>;

    /// Hide completion popups
    fn close_popups(&mut self) {}
}

/// Recently picked colors and paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickHistory {
    colors: VecDeque<String>,
    paths: VecDeque<String>,
    capacity: usize,
}

impl Default for PickHistory {
    fn default() -> Self {
        Self::with_capacity(8)
    }
}

impl PickHistory {
    /// Create empty histories holding at most `capacity` entries each
    pub fn with_capacity(capacity: usize) -> Self {
        PickHistory {
            colors: VecDeque::new(),
            paths: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a picked color, dropping the oldest beyond capacity
    pub fn record_color(&mut self, color: impl Into<String>) {
        push_bounded(&mut self.colors, color.into(), self.capacity);
    }

    /// Record a picked path, dropping the oldest beyond capacity
    pub fn record_path(&mut self, path: impl Into<String>) {
        push_bounded(&mut self.paths, path.into(), self.capacity);
    }

    /// Picked colors, oldest first
    pub fn colors(&self) -> Vec<&str> {
        self.colors.iter().map(String::as_str).collect()
    }

    /// Picked paths, oldest first
    pub fn paths(&self) -> Vec<&str> {
        self.paths.iter().map(String::as_str).collect()
    }
}

fn push_bounded(ring: &mut VecDeque<String>, value: String, capacity: usize) {
    ring.push_back(value);
    while ring.len() > capacity {
        ring.pop_front();
    }
}
