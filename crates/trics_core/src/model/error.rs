//! Caller-visible construction errors for the object model.

use crate::lang::TextId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Why an identifier was refused by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRejection {
    /// Contains a character that is not a Unicode letter or number.
    Malformed,
    /// Exact same string was registered earlier.
    AlreadyRegistered,
}

impl IdentityRejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::AlreadyRegistered => "already_registered",
        }
    }
}

/// Construction failure for identities, fields and components.
///
/// Both variants are raised synchronously and the constructing call produces
/// no object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidIdentity {
        id: String,
        reason: IdentityRejection,
    },
    InvalidType {
        /// Name of the rejected dynamic kind, e.g. `null` or `array`.
        found: &'static str,
    },
}

impl ModelError {
    /// Translation key for the user-facing message of this error.
    pub fn text_id(&self) -> TextId {
        match self {
            Self::InvalidIdentity { .. } => TextId::InvalidIdentityMessage,
            Self::InvalidType { .. } => TextId::InvalidTypeMessage,
        }
    }
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentity { id, reason } => match reason {
                IdentityRejection::Malformed => {
                    write!(f, "invalid identity `{id}`: only letters and numbers are allowed")
                }
                IdentityRejection::AlreadyRegistered => {
                    write!(f, "invalid identity `{id}`: already registered")
                }
            },
            Self::InvalidType { found } => write!(
                f,
                "invalid type `{found}`: expected integer, decimal, boolean or string"
            ),
        }
    }
}

impl Error for ModelError {}
