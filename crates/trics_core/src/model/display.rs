//! User-facing name and description shared by displayable entities.

use crate::model::identity::Identity;
use serde::{Deserialize, Serialize};

/// Display name and description; a missing value is stored as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetadata {
    pub display_name: String,
    pub description: String,
}

impl DisplayMetadata {
    pub fn new(display_name: Option<&str>, description: Option<&str>) -> Self {
        Self {
            display_name: display_name.unwrap_or_default().to_string(),
            description: description.unwrap_or_default().to_string(),
        }
    }

    /// Metadata with both values empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn named(display_name: &str) -> Self {
        Self::new(Some(display_name), None)
    }
}

/// An identified entity the user can see.
pub trait Displayable {
    fn identity(&self) -> &Identity;
    fn display(&self) -> &DisplayMetadata;

    fn display_name(&self) -> &str {
        &self.display().display_name
    }

    fn description(&self) -> &str {
        &self.display().description
    }
}
