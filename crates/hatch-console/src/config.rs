//! Console configuration.

use std::path::Path;

use serde::Deserialize;

use hatch_types::error::{HatchError, Result};

/// Tunable settings for a console session.
///
/// Loaded from TOML; every field has a default, so an empty document is
/// valid. Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Maximum number of suggestions offered for the edit buffer.
    #[serde(default = "default_suggestion_cap")]
    pub suggestion_cap: usize,
    /// Transcript length limit; the oldest entries are dropped first.
    #[serde(default = "default_max_log_entries")]
    pub max_log_entries: usize,
    /// Prefix used when echoing a submitted line to the transcript.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_suggestion_cap() -> usize {
    5
}
fn default_max_log_entries() -> usize {
    500
}
fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            suggestion_cap: default_suggestion_cap(),
            max_log_entries: default_max_log_entries(),
            prompt: default_prompt(),
        }
    }
}

impl ConsoleConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| HatchError::Config(format!("console config: {e}")))
    }

    /// Load a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}
