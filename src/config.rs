//! Configuration for the completion engine
//!
//! Reads configuration from:
//! - `.lexisense.yaml` / `.lexisense.json` (project-level)
//! - `~/.lexisense.yaml` (user-level)
//!
//! Option names use camelCase keys so a settings file can be shared with
//! the editor-side configuration verbatim.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Merge words from the external user dictionary files
    pub use_external_user_dict_file: bool,

    /// Extra words supplied directly in configuration
    pub user_dictionary: Vec<String>,

    /// Newline-delimited dictionary files to merge
    pub external_user_dict_files: Vec<PathBuf>,

    /// Append a space after an inserted word when nothing already
    /// separates it from the following character
    pub add_space_after_completion: bool,

    /// Minimum typed-prefix length before suggestions fire
    pub least_num_of_chars: usize,

    /// Enable the source-code document kinds (completion inside
    /// comments and strings)
    pub programming_language: bool,

    /// Companion spell-checker settings files whose word lists are merged
    pub companion_settings_files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_external_user_dict_file: false,
            user_dictionary: Vec::new(),
            external_user_dict_files: Vec::new(),
            add_space_after_completion: false,
            least_num_of_chars: 1,
            programming_language: false,
            companion_settings_files: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;

        let config: Config = if path.extension().map_or(false, |e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Discover configuration: project-level file in `dir`, then the
    /// user-level file in the home directory, then defaults.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        for name in [".lexisense.yaml", ".lexisense.yml", ".lexisense.json"] {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }

        if let Some(home) = dirs::home_dir() {
            let candidate = home.join(".lexisense.yaml");
            if candidate.exists() {
                return Self::load(&candidate);
            }
        }

        Ok(Self::default())
    }

    /// Check option values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.least_num_of_chars < 1 {
            return Err(ConfigError::Invalid(
                "leastNumOfChars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
