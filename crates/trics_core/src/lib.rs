//! Core object model for TRICS.
//! This crate is the single source of truth for identity, tag and field
//! invariants, plus the preference and translation loaders they rely on.

pub mod context;
pub mod lang;
pub mod logging;
pub mod model;
pub mod preferences;
pub mod settings;
pub mod text_file;

pub use context::{BootstrapReport, CoreContext};
pub use lang::{TextId, Translations, NO_TRANSLATION};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::component::Component;
pub use model::display::{DisplayMetadata, Displayable};
pub use model::error::{IdentityRejection, ModelError, ModelResult};
pub use model::field::TypedField;
pub use model::identity::{is_valid_identity, Identity, IdentityRegistry};
pub use model::key::CaseInsensitiveKey;
pub use model::tags::TagSet;
pub use model::value::{TypeTag, TypedValue};
pub use preferences::{Preference, PreferenceStore};
pub use settings::{CoreSettings, TextEncoding};
pub use text_file::{LoadError, LoadSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
