//! Translation lookup for user-facing text.
//!
//! # Responsibility
//! - Load `key:text` language files.
//! - Resolve every displayed string through a key, never hard-coded text.
//!
//! # Invariants
//! - A successful load replaces the previous translations wholesale.
//! - A load without a single valid line fails and keeps the previous
//!   translations active.
//! - Lookups never fail; unknown keys resolve to `NO_TRANSLATION`.

mod text_id;

pub use text_id::TextId;

use crate::model::error::ModelError;
use crate::model::identity::IDENTITY_PATTERN;
use crate::settings::TextEncoding;
use crate::text_file::{read_lines, split_lines, LoadError, LoadSummary};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

/// Shown when no text is available for a key.
pub const NO_TRANSLATION: &str = "Error: No text is defined";

static TRANSLATION_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({IDENTITY_PATTERN}):(.*)$")).expect("valid translation line regex")
});

/// Splits a translation line into `(key, text)`.
pub fn parse_translation_line(line: &str) -> Option<(&str, &str)> {
    let captures = TRANSLATION_LINE_RE.captures(line)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

#[derive(Debug, Clone, Default)]
pub struct Translations {
    entries: Option<HashMap<String, String>>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a language file, e.g. `lang/en-us.core.lang`.
    ///
    /// # Errors
    /// - `LoadError::Io` / `LoadError::Encoding` when the file cannot be read.
    /// - `LoadError::NoEntries` when no line is a valid translation.
    pub fn load_file(
        &mut self,
        path: &Path,
        encoding: TextEncoding,
    ) -> Result<LoadSummary, LoadError> {
        let started_at = Instant::now();
        let lines = match read_lines(path, encoding) {
            Ok(lines) => lines,
            Err(err) => {
                let err = LoadError::from_read(path, err);
                warn!(
                    "event=language_load module=lang status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                return Err(err);
            }
        };

        self.replace_from(lines.iter().map(String::as_str), started_at)
            .map_err(|_| LoadError::NoEntries {
                path: Some(path.to_path_buf()),
            })
    }

    /// Loads translations from in-memory text.
    ///
    /// # Errors
    /// - `LoadError::NoEntries` when no line is a valid translation.
    pub fn load_str(&mut self, text: &str) -> Result<LoadSummary, LoadError> {
        self.replace_from(split_lines(text), Instant::now())
            .map_err(|_| LoadError::NoEntries { path: None })
    }

    fn replace_from<'a>(
        &mut self,
        lines: impl Iterator<Item = &'a str>,
        started_at: Instant,
    ) -> Result<LoadSummary, ()> {
        let mut staged = HashMap::new();
        let mut skipped = 0;
        for (index, line) in lines.enumerate() {
            match parse_translation_line(line) {
                Some((key, text)) => {
                    staged.insert(key.to_string(), text.to_string());
                }
                None => {
                    skipped += 1;
                    debug!("event=language_line module=lang status=skip line={}", index + 1);
                }
            }
        }

        if staged.is_empty() {
            warn!(
                "event=language_load module=lang status=error duration_ms={} error_code=no_entries skipped={}",
                started_at.elapsed().as_millis(),
                skipped
            );
            return Err(());
        }

        let summary = LoadSummary {
            entries: staged.len(),
            skipped,
        };
        self.entries = Some(staged);
        info!(
            "event=language_load module=lang status=ok duration_ms={} entries={} skipped={}",
            started_at.elapsed().as_millis(),
            summary.entries,
            summary.skipped
        );
        Ok(summary)
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Raw lookup; `None` when nothing is loaded or the key is unknown.
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.entries.as_ref()?.get(key).map(String::as_str)
    }

    /// Text for `key`, or `NO_TRANSLATION`.
    pub fn get(&self, key: &str) -> &str {
        self.try_get(key).unwrap_or(NO_TRANSLATION)
    }

    pub fn text(&self, id: TextId) -> &str {
        self.get(id.as_str())
    }

    /// Localized message for a model error.
    pub fn message_for(&self, err: &ModelError) -> &str {
        self.text(err.text_id())
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_translation_line, Translations, NO_TRANSLATION};

    #[test]
    fn parses_key_and_rest_of_line() {
        assert_eq!(
            parse_translation_line("Greeting:Hello: world"),
            Some(("Greeting", "Hello: world"))
        );
        assert_eq!(parse_translation_line("Empty:"), Some(("Empty", "")));
        assert_eq!(parse_translation_line("Bad Key:x"), None);
        assert_eq!(parse_translation_line("no colon"), None);
    }

    #[test]
    fn get_falls_back_before_load() {
        let translations = Translations::new();
        assert!(!translations.is_loaded());
        assert_eq!(translations.get("Greeting"), NO_TRANSLATION);
        assert_eq!(translations.try_get("Greeting"), None);
    }
}
