//! Startup settings for one core session.
//!
//! # Responsibility
//! - Locate the preferences and language files.
//! - Select the text encoding used by both loaders.
//!
//! # Invariants
//! - Every field has a default, so an empty JSON object is a valid document.
//! - Unknown keys are rejected instead of silently ignored.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PREFERENCES_FILE: &str = "user.preferences";
pub const DEFAULT_LANG_DIR: &str = "lang";

/// Encoding of preferences and language files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextEncoding {
    /// Files written by earlier releases.
    #[default]
    Utf16,
    Utf8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreSettings {
    /// Directory the other paths are resolved against.
    pub base_dir: PathBuf,
    pub preferences_file: String,
    /// Language directory, relative to `base_dir`.
    pub lang_dir: String,
    /// Language file loaded at bootstrap, e.g. `en-us.core.lang`.
    pub language_file: Option<String>,
    pub encoding: TextEncoding,
    /// Overrides `logging::default_log_level()` when set.
    pub log_level: Option<String>,
}

impl Default for CoreSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            preferences_file: DEFAULT_PREFERENCES_FILE.to_string(),
            lang_dir: DEFAULT_LANG_DIR.to_string(),
            language_file: None,
            encoding: TextEncoding::default(),
            log_level: None,
        }
    }
}

impl CoreSettings {
    /// Parses a JSON settings document.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.base_dir.join(&self.preferences_file)
    }

    pub fn language_path(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(&self.lang_dir).join(file_name)
    }

    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(crate::logging::default_log_level())
    }
}
