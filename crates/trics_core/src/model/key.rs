//! Case-insensitive string key.
//!
//! # Responsibility
//! - Compare and hash text without regard to letter case.
//! - Preserve the caller's original casing for display.
//!
//! # Invariants
//! - `a == b` implies `hash(a) == hash(b)`; both fold every character to
//!   the lowercase of its uppercase form.
//! - Folding is one character to one character. Characters whose case mapping
//!   expands (`ß` uppercases to `SS`) are kept as they are.

use serde::{Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// String wrapper with case-insensitive equality and hashing.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveKey {
    text: String,
}

impl CaseInsensitiveKey {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the text with its original casing.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive comparison against raw text.
    pub fn matches(&self, other: &str) -> bool {
        folded(&self.text).eq(folded(other))
    }
}

fn folded(value: &str) -> impl Iterator<Item = char> + '_ {
    value.chars().map(fold_char)
}

// Uppercasing first unifies final/medial sigma and long s with their plain forms.
fn fold_char(c: char) -> char {
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    mapped.next().is_none().then_some(first)
}

impl PartialEq for CaseInsensitiveKey {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.text)
    }
}

impl Eq for CaseInsensitiveKey {}

impl PartialEq<str> for CaseInsensitiveKey {
    fn eq(&self, other: &str) -> bool {
        self.matches(other)
    }
}

impl PartialEq<&str> for CaseInsensitiveKey {
    fn eq(&self, other: &&str) -> bool {
        self.matches(other)
    }
}

impl Hash for CaseInsensitiveKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in folded(&self.text) {
            state.write_u32(c as u32);
        }
        state.write_u8(0xff);
    }
}

impl Display for CaseInsensitiveKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for CaseInsensitiveKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for CaseInsensitiveKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Serialize for CaseInsensitiveKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
