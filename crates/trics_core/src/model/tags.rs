//! Case-insensitive, duplicate-free tag collection.
//!
//! # Responsibility
//! - Keep the labels attached to one entity in insertion order.
//!
//! # Invariants
//! - No two members compare equal under `CaseInsensitiveKey`.
//! - The first spelling of a tag wins; later case variants are dropped.

use crate::model::key::CaseInsensitiveKey;
use serde::Serialize;

/// Ordered tag set owned by a single entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: Vec<CaseInsensitiveKey>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the tags with their original casing.
    pub fn tags(&self) -> Vec<String> {
        self.tags.iter().map(|tag| tag.as_str().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(CaseInsensitiveKey::as_str)
    }

    pub fn is_tagged(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing.matches(tag))
    }

    /// Appends `tag` unless a case-insensitive match is already present.
    pub fn tag(&mut self, tag: &str) -> bool {
        if self.is_tagged(tag) {
            return false;
        }
        self.tags.push(CaseInsensitiveKey::new(tag));
        true
    }

    /// Removes the case-insensitive match of `tag`, if any.
    pub fn untag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| !existing.matches(tag));
        self.tags.len() != before
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.tag(tag.as_ref());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::TagSet;

    #[test]
    fn initial_list_drops_later_case_duplicates() {
        let set: TagSet = ["Red", "blue", "RED", "Blue", "green"].into_iter().collect();
        assert_eq!(set.tags(), vec!["Red", "blue", "green"]);
    }

    #[test]
    fn snapshot_is_detached_from_the_set() {
        let mut set: TagSet = ["a"].into_iter().collect();
        let mut snapshot = set.tags();
        snapshot.push("b".to_string());
        set.tag("c");
        assert_eq!(set.tags(), vec!["a", "c"]);
        assert_eq!(snapshot, vec!["a", "b"]);
    }

    #[test]
    fn untag_removes_any_casing() {
        let mut set = TagSet::new();
        assert!(set.tag("Urgent"));
        assert!(set.untag("uRGENT"));
        assert!(set.is_empty());
        assert!(!set.untag("urgent"));
    }
}
