//! Identifier grammar, registry and identity value.
//!
//! # Responsibility
//! - Decide whether an identifier string is well-formed.
//! - Guarantee that a registry hands out every identifier string at most once.
//!
//! # Invariants
//! - A valid identifier consists only of Unicode letters (`L`) and numbers
//!   (`N`). The empty string is valid.
//! - Registration is exact-string and permanent for the registry lifetime.
//! - `Identity` equality and hashing are case-insensitive, so two identities
//!   registered as `abc` and `ABC` compare equal. This mismatch with the
//!   registry check is kept on purpose until both notions are unified.
//!
//! # See also
//! - `crate::context::CoreContext` owns the registry for one session.

use crate::model::error::{IdentityRejection, ModelError, ModelResult};
use crate::model::key::CaseInsensitiveKey;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};

/// Unanchored identifier grammar, shared with the line-oriented loaders.
pub const IDENTITY_PATTERN: &str = r"[\p{L}\p{N}]*";

static IDENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{IDENTITY_PATTERN}$")).expect("valid identity regex")
});

/// Returns true when `id` matches the letter/number-only grammar.
pub fn is_valid_identity(id: &str) -> bool {
    IDENTITY_RE.is_match(id)
}

/// Set of every identifier registered during one session.
///
/// The format check, the membership test and the insert run under a single
/// lock, so concurrent registration of one string succeeds at most once.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    ids: Mutex<HashSet<String>>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as [`is_valid_identity`]; does not consult registry state.
    pub fn validate(&self, id: &str) -> bool {
        is_valid_identity(id)
    }

    /// Registers `id`, failing when it is malformed or already present.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` with `IdentityRejection::Malformed` or
    ///   `IdentityRejection::AlreadyRegistered`.
    pub fn register(&self, id: &str) -> ModelResult<()> {
        let mut ids = self.lock();
        let rejection = if !is_valid_identity(id) {
            Some(IdentityRejection::Malformed)
        } else if ids.contains(id) {
            Some(IdentityRejection::AlreadyRegistered)
        } else {
            None
        };

        if let Some(reason) = rejection {
            drop(ids);
            debug!(
                "event=identity_register module=model status=error reason={} id={}",
                reason.as_str(),
                id
            );
            return Err(ModelError::InvalidIdentity {
                id: id.to_string(),
                reason,
            });
        }

        ids.insert(id.to_string());
        drop(ids);
        debug!("event=identity_register module=model status=ok id={id}");
        Ok(())
    }

    /// Exact-string membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        // A panic while holding the lock cannot leave a half-inserted entry.
        self.ids
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Validated identifier registered in an [`IdentityRegistry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    key: CaseInsensitiveKey,
}

impl Identity {
    /// Validates and registers `id`.
    ///
    /// # Errors
    /// - `ModelError::InvalidIdentity` under the rules of
    ///   [`IdentityRegistry::register`].
    pub fn new(registry: &IdentityRegistry, id: impl Into<String>) -> ModelResult<Self> {
        let id = id.into();
        registry.register(&id)?;
        Ok(Self {
            key: CaseInsensitiveKey::new(id),
        })
    }

    pub fn as_str(&self) -> &str {
        self.key.as_str()
    }
}

impl PartialEq<str> for Identity {
    fn eq(&self, other: &str) -> bool {
        self.key.matches(other)
    }
}

impl PartialEq<&str> for Identity {
    fn eq(&self, other: &&str) -> bool {
        self.key.matches(other)
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
