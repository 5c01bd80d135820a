//! Session context owning the identity registry and loaded collaborators.
//!
//! # Responsibility
//! - Provide the registry that every identity in one session is checked
//!   against, with a lifecycle bounded by the context.
//! - Run the startup loads for preferences and translations.
//!
//! # Invariants
//! - Bootstrap never fails as a whole; each load reports its own outcome.
//! - A failed reload keeps the previously loaded state.

use crate::lang::Translations;
use crate::model::identity::IdentityRegistry;
use crate::preferences::PreferenceStore;
use crate::settings::CoreSettings;
use crate::text_file::{LoadError, LoadSummary};
use log::info;

/// Per-load outcomes of [`CoreContext::bootstrap`].
#[derive(Debug)]
pub struct BootstrapReport {
    pub preferences: Result<LoadSummary, LoadError>,
    /// `None` when no language file is configured.
    pub language: Option<Result<LoadSummary, LoadError>>,
}

#[derive(Debug)]
pub struct CoreContext {
    settings: CoreSettings,
    registry: IdentityRegistry,
    preferences: PreferenceStore,
    translations: Translations,
}

impl CoreContext {
    /// Fresh context with an empty registry and nothing loaded.
    pub fn new(settings: CoreSettings) -> Self {
        Self {
            settings,
            registry: IdentityRegistry::new(),
            preferences: PreferenceStore::new(),
            translations: Translations::new(),
        }
    }

    /// Creates a context and performs the startup loads.
    pub fn bootstrap(settings: CoreSettings) -> (Self, BootstrapReport) {
        let mut context = Self::new(settings);
        let preferences = context.reload_preferences();
        let language = context
            .settings
            .language_file
            .clone()
            .map(|file_name| context.set_language(&file_name));

        info!(
            "event=context_bootstrap module=context status=ok preferences={} language={}",
            outcome_label(Some(&preferences)),
            outcome_label(language.as_ref())
        );
        (
            context,
            BootstrapReport {
                preferences,
                language,
            },
        )
    }

    /// Re-reads the configured preferences file and merges it in.
    ///
    /// # Errors
    /// - See [`PreferenceStore::load_file`].
    pub fn reload_preferences(&mut self) -> Result<LoadSummary, LoadError> {
        let path = self.settings.preferences_path();
        self.preferences.load_file(&path, self.settings.encoding)
    }

    /// Switches to the language file `file_name` inside the language dir.
    ///
    /// # Errors
    /// - See [`Translations::load_file`].
    pub fn set_language(&mut self, file_name: &str) -> Result<LoadSummary, LoadError> {
        let path = self.settings.language_path(file_name);
        self.translations.load_file(&path, self.settings.encoding)
    }

    pub fn settings(&self) -> &CoreSettings {
        &self.settings
    }

    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}

fn outcome_label(outcome: Option<&Result<LoadSummary, LoadError>>) -> &'static str {
    match outcome {
        None => "skipped",
        Some(Ok(_)) => "ok",
        Some(Err(err)) => err.code(),
    }
}
