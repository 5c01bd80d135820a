//! Identity, tag and typed-field object model.
//!
//! # Responsibility
//! - Define the identified, displayable, taggable entities every other layer
//!   (rendering, scripting, persistence) consumes.
//!
//! # Invariants
//! - Every entity is identified by an `Identity` registered in exactly one
//!   `IdentityRegistry`.
//! - Entities are composed from value types, not layered.

pub mod component;
pub mod display;
pub mod error;
pub mod field;
pub mod identity;
pub mod key;
pub mod tags;
pub mod value;
