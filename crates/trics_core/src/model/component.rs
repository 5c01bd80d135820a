//! Identified, displayable, taggable, field-bearing entity.
//!
//! # Responsibility
//! - Aggregate an `Identity`, `DisplayMetadata`, a `TagSet` and typed fields.
//!
//! # Invariants
//! - Field ids are unique within one component; on construction a later field
//!   with an already-seen id replaces the earlier one.
//! - The field set is fixed after construction. Field values may still change
//!   through `get_field_mut` under the field's own guard.
//! - Equality and hashing follow the component identity (case-insensitive).

use crate::model::display::{DisplayMetadata, Displayable};
use crate::model::error::ModelResult;
use crate::model::field::TypedField;
use crate::model::identity::{Identity, IdentityRegistry};
use crate::model::tags::TagSet;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Canonical interactive unit of the application.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    id: Identity,
    #[serde(flatten)]
    display: DisplayMetadata,
    tags: TagSet,
    fields: HashMap<String, TypedField>,
}

impl Component {
    /// Component without tags or fields.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` when `id` is malformed or taken.
    pub fn new(
        registry: &IdentityRegistry,
        id: impl Into<String>,
        display: DisplayMetadata,
    ) -> ModelResult<Self> {
        Self::with_fields(registry, id, display, Vec::<String>::new(), Vec::new())
    }

    /// Component with initial tags, deduplicated case-insensitively in order.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` when `id` is malformed or taken.
    pub fn with_tags<I, S>(
        registry: &IdentityRegistry,
        id: impl Into<String>,
        display: DisplayMetadata,
        tags: I,
    ) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_fields(registry, id, display, tags, Vec::new())
    }

    /// Component with initial tags and fields, mainly for loading.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` when `id` is malformed or taken.
    pub fn with_fields<I, S>(
        registry: &IdentityRegistry,
        id: impl Into<String>,
        display: DisplayMetadata,
        tags: I,
        fields: Vec<TypedField>,
    ) -> ModelResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let id = Identity::new(registry, id)?;
        let supplied = fields.len();
        let fields: HashMap<String, TypedField> = fields
            .into_iter()
            .map(|field| (field.id().as_str().to_string(), field))
            .collect();
        if fields.len() != supplied {
            debug!(
                "event=component_fields module=model status=ok id={} supplied={} kept={}",
                id,
                supplied,
                fields.len()
            );
        }

        Ok(Self {
            id,
            display,
            tags: tags.into_iter().collect(),
            fields,
        })
    }

    pub fn id(&self) -> &Identity {
        &self.id
    }

    pub fn tag_set(&self) -> &TagSet {
        &self.tags
    }

    /// Snapshot of the tags in insertion order with original casing.
    pub fn tags(&self) -> Vec<String> {
        self.tags.tags()
    }

    pub fn is_tagged(&self, tag: &str) -> bool {
        self.tags.is_tagged(tag)
    }

    /// Returns `false` when `tag` is already present in any casing.
    pub fn tag(&mut self, tag: &str) -> bool {
        self.tags.tag(tag)
    }

    /// Returns `true` when a case-insensitive match was removed.
    pub fn untag(&mut self, tag: &str) -> bool {
        self.tags.untag(tag)
    }

    /// Owned snapshot of every field, in no particular order.
    pub fn get_all_fields(&self) -> Vec<TypedField> {
        self.fields.values().cloned().collect()
    }

    /// Exact-id lookup.
    pub fn get_field(&self, id: &str) -> Option<&TypedField> {
        self.fields.get(id)
    }

    pub fn get_field_mut(&mut self, id: &str) -> Option<&mut TypedField> {
        self.fields.get_mut(id)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl Displayable for Component {
    fn identity(&self) -> &Identity {
        &self.id
    }

    fn display(&self) -> &DisplayMetadata {
        &self.display
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Component {}

impl PartialEq<str> for Component {
    fn eq(&self, other: &str) -> bool {
        self.id == *other
    }
}

impl PartialEq<&str> for Component {
    fn eq(&self, other: &&str) -> bool {
        self.id == **other
    }
}

impl Hash for Component {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Component;
    use crate::model::display::{DisplayMetadata, Displayable};
    use crate::model::field::TypedField;
    use crate::model::identity::IdentityRegistry;
    use crate::model::value::TypedValue;

    #[test]
    fn get_field_is_exact_and_absent_is_none() {
        let registry = IdentityRegistry::new();
        let field =
            TypedField::new(&registry, "count", DisplayMetadata::empty(), 1, true).unwrap();
        let component = Component::with_fields(
            &registry,
            "Counter",
            DisplayMetadata::named("Counter"),
            ["ui"],
            vec![field],
        )
        .unwrap();

        assert!(component.get_field("count").is_some());
        assert!(component.get_field("COUNT").is_none());
        assert!(component.get_field("missing").is_none());
        assert_eq!(component.display_name(), "Counter");
    }

    #[test]
    fn get_field_mut_applies_field_guard() {
        let registry = IdentityRegistry::new();
        let field =
            TypedField::new(&registry, "count", DisplayMetadata::empty(), 1, true).unwrap();
        let mut component = Component::with_fields(
            &registry,
            "Counter",
            DisplayMetadata::empty(),
            Vec::<String>::new(),
            vec![field],
        )
        .unwrap();

        let previous = component
            .get_field_mut("count")
            .and_then(|field| field.set_value(TypedValue::Integer(2)));
        assert_eq!(previous, Some(TypedValue::Integer(1)));
        assert_eq!(
            component.get_field("count").map(TypedField::get_data),
            Some(&TypedValue::Integer(2))
        );
    }
}
