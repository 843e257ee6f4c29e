//! Recently opened files offered by the host

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A file the host knows how to reopen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Optional preview image
    pub thumbnail: Option<PathBuf>,
    /// Command line that reopens the file
    pub open_command: String,
}

impl FileSpec {
    /// Create a file entry whose open command is `open <path>`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let open_command = format!("open {}", quote_path(&path.to_string_lossy()));
        FileSpec {
            path,
            thumbnail: None,
            open_command,
        }
    }

    /// Replace the command used to reopen this file
    pub fn with_open_command(mut self, command: impl Into<String>) -> Self {
        self.open_command = command.into();
        self
    }

    /// Attach a preview image
    pub fn with_thumbnail(mut self, thumbnail: impl Into<PathBuf>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Path as displayed in completion lists
    pub fn display_path(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }
}

fn quote_path(path: &str) -> String {
    if path.contains(char::is_whitespace) {
        format!("\"{}\"", path)
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_open_command() {
        let spec = FileSpec::new("/data/1abc.cif");
        assert_eq!(spec.open_command, "open /data/1abc.cif");

        let spec = FileSpec::new("/my data/1abc.cif");
        assert_eq!(spec.open_command, "open \"/my data/1abc.cif\"");
    }

    #[test]
    fn test_custom_open_command() {
        let spec = FileSpec::new("/data/session.cxs").with_open_command("open /data/session.cxs format session");
        assert_eq!(spec.open_command, "open /data/session.cxs format session");
        assert_eq!(spec.display_path(), "/data/session.cxs");
    }
}
