//! Translation keys used by the core itself.

/// Key of a user-facing string in a language file.
///
/// Key strings are shared with existing language files and must satisfy the
/// identity grammar, since the translation line grammar reuses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextId {
    InvalidIdentityMessage,
    InvalidTypeMessage,
}

impl TextId {
    pub const ALL: [TextId; 2] = [Self::InvalidIdentityMessage, Self::InvalidTypeMessage];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidIdentityMessage => "InvalidIDExceptionMessage",
            Self::InvalidTypeMessage => "InvalidTypeExceptionMessage",
        }
    }
}
