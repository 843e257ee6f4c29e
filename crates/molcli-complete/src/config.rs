//! Completion settings
//!
//! Tunable limits of the engine. Hosts may load them from a JSON document;
//! missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::action::PickHistory;
use crate::error::ConfigError;
use molcli_cmd::CommandHistory;

/// Limits used while computing completions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Residues shown on each side of the targeted residue in the sequence view
    pub residue_window: usize,
    /// Maximum number of entries listed from one directory
    pub path_limit: usize,
    /// Capacity of the picked-color and picked-path histories
    pub pick_history_limit: usize,
    /// Capacity of the command line history
    pub command_history_limit: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            residue_window: 40,
            path_limit: 64,
            pick_history_limit: 8,
            command_history_limit: 120,
        }
    }
}

impl CompletionConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a (possibly partial) JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CompletionConfig = serde_json::from_str(json)?;
        if config.path_limit == 0 {
            return Err(ConfigError::InvalidValue {
                name: "path_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        log::debug!("Loaded completion config: {:?}", config);
        Ok(config)
    }

    /// Empty pick history sized by this configuration
    pub fn pick_history(&self) -> PickHistory {
        PickHistory::with_capacity(self.pick_history_limit)
    }

    /// Empty command history sized by this configuration
    pub fn command_history(&self) -> CommandHistory {
        CommandHistory::with_capacity(self.command_history_limit)
    }
}
