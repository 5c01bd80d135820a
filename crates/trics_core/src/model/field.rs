//! Typed, optionally mutable data field.
//!
//! # Responsibility
//! - Hold one value whose kind is fixed at construction.
//! - Guard updates by mutability and kind.
//!
//! # Invariants
//! - `kind()` never changes after construction.
//! - A rejected update leaves the value untouched and returns `None`.
//! - Field equality compares kind and value only; identity and display
//!   metadata are ignored.

use crate::model::display::{DisplayMetadata, Displayable};
use crate::model::error::ModelResult;
use crate::model::identity::{Identity, IdentityRegistry};
use crate::model::value::{TypeTag, TypedValue};
use serde::Serialize;

/// Named container for one [`TypedValue`].
#[derive(Debug, Clone, Serialize)]
pub struct TypedField {
    id: Identity,
    #[serde(flatten)]
    display: DisplayMetadata,
    #[serde(flatten)]
    value: TypedValue,
    mutable: bool,
}

impl TypedField {
    /// Registers `id` and creates a field holding `value`.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` when `id` is malformed or taken.
    pub fn new(
        registry: &IdentityRegistry,
        id: impl Into<String>,
        display: DisplayMetadata,
        value: impl Into<TypedValue>,
        mutable: bool,
    ) -> ModelResult<Self> {
        let value = value.into();
        let id = Identity::new(registry, id)?;
        Ok(Self {
            id,
            display,
            value,
            mutable,
        })
    }

    /// Creates a field from a dynamically typed value.
    ///
    /// The value is classified before the identifier is registered, so a
    /// type failure does not consume `id`.
    ///
    /// # Errors
    /// - `ModelError::InvalidType` when `value` is not one of the four kinds.
    /// - `ModelError::InvalidIdentity` when `id` is malformed or taken.
    pub fn from_dynamic(
        registry: &IdentityRegistry,
        id: impl Into<String>,
        display: DisplayMetadata,
        value: serde_json::Value,
        mutable: bool,
    ) -> ModelResult<Self> {
        let value = TypedValue::try_from(value)?;
        Self::new(registry, id, display, value, mutable)
    }

    pub fn id(&self) -> &Identity {
        &self.id
    }

    pub fn kind(&self) -> TypeTag {
        self.value.kind()
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn get_data(&self) -> &TypedValue {
        &self.value
    }

    /// Copies the value of `candidate` into this field.
    ///
    /// Returns the previous value on success. `None` means the update was
    /// rejected (immutable field or kind mismatch), not that there was no
    /// prior value.
    pub fn set_data(&mut self, candidate: &TypedField) -> Option<TypedValue> {
        self.set_value(candidate.value.clone())
    }

    /// Same guard as [`TypedField::set_data`] for a bare value.
    pub fn set_value(&mut self, value: TypedValue) -> Option<TypedValue> {
        if !self.mutable || value.kind() != self.kind() {
            return None;
        }
        Some(std::mem::replace(&mut self.value, value))
    }
}

impl PartialEq for TypedField {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for TypedField {}

impl Displayable for TypedField {
    fn identity(&self) -> &Identity {
        &self.id
    }

    fn display(&self) -> &DisplayMetadata {
        &self.display
    }
}
