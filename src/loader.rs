//! Word-source loading for the completion dictionary
//!
//! Sources are newline-delimited text files, the in-configuration word
//! list, and companion spell-checker settings. The built-in list is
//! mandatory; everything else degrades to an empty contribution.

use crate::config::Config;
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Dictionary loading error
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The built-in word list could not be read. Fatal: the engine cannot
    /// start without it.
    #[error("Failed to read built-in word list {path}: {source}")]
    BuiltinSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Word sources feeding the index, in merge order
#[derive(Debug, Clone, Default)]
pub struct DictionarySources {
    /// Built-in word list
    pub builtin: Vec<String>,

    /// User-supplied word lists
    pub user: Vec<Vec<String>>,

    builtin_path: PathBuf,
}

impl DictionarySources {
    /// Load all word sources named by the configuration.
    ///
    /// The built-in list is required; a missing optional source
    /// contributes an empty list.
    pub fn load(builtin_path: &Path, config: &Config) -> Result<Self, DictionaryError> {
        let builtin =
            read_word_file(builtin_path).map_err(|source| DictionaryError::BuiltinSource {
                path: builtin_path.to_path_buf(),
                source,
            })?;

        let mut user = Vec::new();

        if !config.user_dictionary.is_empty() {
            user.push(config.user_dictionary.clone());
        }

        if config.use_external_user_dict_file {
            for path in &config.external_user_dict_files {
                user.push(read_optional_word_file(path));
            }
        }

        for path in &config.companion_settings_files {
            let words = read_companion_words(path);
            if !words.is_empty() {
                user.push(words);
            }
        }

        Ok(Self {
            builtin,
            user,
            builtin_path: builtin_path.to_path_buf(),
        })
    }

    /// Build sources from in-memory lists (tests, embedding hosts)
    pub fn from_lists(builtin: Vec<String>, user: Vec<Vec<String>>) -> Self {
        Self {
            builtin,
            user,
            builtin_path: PathBuf::new(),
        }
    }

    /// Re-read every source from disk
    pub fn reload(&mut self, config: &Config) -> Result<(), DictionaryError> {
        let path = self.builtin_path.clone();
        *self = Self::load(&path, config)?;
        Ok(())
    }

    pub fn builtin_path(&self) -> &Path {
        &self.builtin_path
    }

    /// Number of user sources that contributed at least one line
    pub fn user_source_count(&self) -> usize {
        self.user.iter().filter(|s| !s.is_empty()).count()
    }
}

/// Default location of the per-user dictionary file
pub fn default_user_dict_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lexisense-dict.txt")
}

/// Create the per-user dictionary file if it does not exist yet
pub fn ensure_user_dict(path: &Path) -> Result<(), DictionaryError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, "")?;
    Ok(())
}

fn read_word_file(path: &Path) -> std::io::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content.lines().map(|l| l.to_string()).collect())
}

/// An absent or unreadable optional source is an empty contribution
fn read_optional_word_file(path: &Path) -> Vec<String> {
    match read_word_file(path) {
        Ok(lines) => lines,
        Err(err) => {
            debug!("Skipping user dictionary {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

/// Harvest `words` / `userWords` arrays from a spell-checker settings file
fn read_companion_words(path: &Path) -> Vec<String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!("Skipping companion settings {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            debug!("Ignoring malformed companion settings {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    let mut words = Vec::new();
    for key in ["words", "userWords"] {
        if let Some(array) = value.get(key).and_then(Value::as_array) {
            words.extend(array.iter().filter_map(Value::as_str).map(String::from));
        }
    }
    words
}
