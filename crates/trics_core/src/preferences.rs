//! User preferences grouped by module.
//!
//! # Responsibility
//! - Parse `group.preference:value` lines into a two-level lookup.
//! - Serve raw preference values to modules, which parse them themselves.
//!
//! # Invariants
//! - Malformed lines are skipped and counted, never raised.
//! - A load without a single valid line fails as a whole and leaves the store
//!   untouched.
//! - Loads merge: the last occurrence of a `(group, preference)` pair wins and
//!   pairs absent from the new input are kept.
//! - Values are stored verbatim, including leading/trailing whitespace.

use crate::model::identity::IDENTITY_PATTERN;
use crate::settings::TextEncoding;
use crate::text_file::{read_lines, split_lines, LoadError, LoadSummary};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

static PREFERENCE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^({IDENTITY_PATTERN})\.({IDENTITY_PATTERN}):(.*)$"
    ))
    .expect("valid preference line regex")
});

/// One stored preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preference {
    pub id: String,
    /// Raw text after the first colon.
    pub value: String,
}

/// Parsed view of one preference line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferenceLine<'a> {
    pub group_id: &'a str,
    pub preference_id: &'a str,
    pub value: &'a str,
}

/// Splits a preference line, or returns `None` when it does not match
/// `<id>.<id>:<anything>`.
pub fn parse_preference_line(line: &str) -> Option<PreferenceLine<'_>> {
    let captures = PREFERENCE_LINE_RE.captures(line)?;
    Some(PreferenceLine {
        group_id: captures.get(1)?.as_str(),
        preference_id: captures.get(2)?.as_str(),
        value: captures.get(3)?.as_str(),
    })
}

#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    groups: HashMap<String, HashMap<String, Preference>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a preferences file and merges it into the store.
    ///
    /// # Errors
    /// - `LoadError::Io` / `LoadError::Encoding` when the file cannot be read.
    /// - `LoadError::NoEntries` when no line is a valid preference.
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
                    "event=preferences_load module=preferences status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                return Err(err);
            }
        };

        let result = self.apply_lines(lines.iter().map(String::as_str));
        log_outcome(&result, started_at);
        result.map_err(|_| LoadError::NoEntries {
            path: Some(path.to_path_buf()),
        })
    }

    /// Loads preferences from in-memory text.
    ///
    /// # Errors
    /// - `LoadError::NoEntries` when no line is a valid preference.
    pub fn load_str(&mut self, text: &str) -> Result<LoadSummary, LoadError> {
        let started_at = Instant::now();
        let result = self.apply_lines(split_lines(text));
        log_outcome(&result, started_at);
        result.map_err(|_| LoadError::NoEntries { path: None })
    }

    fn apply_lines<'a>(
        &mut self,
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<LoadSummary, LoadSummary> {
        let mut staged = Vec::new();
        let mut summary = LoadSummary::default();
        for (index, line) in lines.enumerate() {
            match parse_preference_line(line) {
                Some(parsed) => staged.push(parsed),
                None => {
                    summary.skipped += 1;
                    debug!(
                        "event=preferences_line module=preferences status=skip line={}",
                        index + 1
                    );
                }
            }
        }

        if staged.is_empty() {
            return Err(summary);
        }

        summary.entries = staged.len();
        for line in staged {
            self.groups
                .entry(line.group_id.to_string())
                .or_default()
                .insert(
                    line.preference_id.to_string(),
                    Preference {
                        id: line.preference_id.to_string(),
                        value: line.value.to_string(),
                    },
                );
        }
        Ok(summary)
    }

    pub fn get(&self, group_id: &str, preference_id: &str) -> Option<&Preference> {
        self.groups.get(group_id)?.get(preference_id)
    }

    /// Raw value of one preference.
    pub fn value(&self, group_id: &str, preference_id: &str) -> Option<&str> {
        self.get(group_id, preference_id)
            .map(|preference| preference.value.as_str())
    }

    /// Sorted group ids.
    pub fn group_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.groups.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Total number of stored preferences across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn log_outcome(result: &Result<LoadSummary, LoadSummary>, started_at: Instant) {
    match result {
        Ok(summary) => info!(
            "event=preferences_load module=preferences status=ok duration_ms={} entries={} skipped={}",
            started_at.elapsed().as_millis(),
            summary.entries,
            summary.skipped
        ),
        Err(summary) => warn!(
            "event=preferences_load module=preferences status=error duration_ms={} error_code=no_entries skipped={}",
            started_at.elapsed().as_millis(),
            summary.skipped
        ),
    }
}
