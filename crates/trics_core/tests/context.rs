use std::fs;
use std::path::Path;
use trics_core::text_file::encode_utf16;
use trics_core::{
    Component, CoreContext, CoreSettings, DisplayMetadata, LoadError, TextEncoding, TextId,
};

fn settings_for(base_dir: &Path, language_file: Option<&str>) -> CoreSettings {
    CoreSettings {
        base_dir: base_dir.to_path_buf(),
        language_file: language_file.map(str::to_string),
        ..CoreSettings::default()
    }
}

#[test]
fn bootstrap_loads_preferences_and_language() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    fs::write(
        dir.path().join("user.preferences"),
        encode_utf16("core.autosave:true\n"),
    )
    .expect("fixture file should be written");
    fs::create_dir(dir.path().join("lang")).expect("lang dir should be created");
    fs::write(
        dir.path().join("lang").join("en-us.core.lang"),
        encode_utf16("InvalidIDExceptionMessage:Invalid ID\n"),
    )
    .expect("fixture file should be written");

    let (context, report) =
        CoreContext::bootstrap(settings_for(dir.path(), Some("en-us.core.lang")));

    let preferences = report.preferences.expect("bootstrap should load preferences");
    assert_eq!(preferences.entries, 1);
    let language = report
        .language
        .expect("language file should be configured")
        .expect("bootstrap should load the language file");
    assert_eq!(language.entries, 1);
    assert_eq!(context.preferences().value("core", "autosave"), Some("true"));
    assert_eq!(
        context.translations().text(TextId::InvalidIdentityMessage),
        "Invalid ID"
    );
}

#[test]
fn bootstrap_survives_missing_files() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let (context, report) = CoreContext::bootstrap(settings_for(dir.path(), Some("xx.core.lang")));

    assert!(matches!(report.preferences, Err(LoadError::Io { .. })));
    assert!(matches!(report.language, Some(Err(LoadError::Io { .. }))));
    assert!(context.preferences().is_empty());
    assert!(!context.translations().is_loaded());
    assert!(context.registry().is_empty());
}

#[test]
fn bootstrap_without_language_file_skips_it() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let (_, report) = CoreContext::bootstrap(settings_for(dir.path(), None));
    assert!(report.language.is_none());
}

#[test]
fn reload_and_language_switch_on_request() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let settings = CoreSettings {
        encoding: TextEncoding::Utf8,
        ..settings_for(dir.path(), None)
    };
    let mut context = CoreContext::new(settings);

    fs::write(dir.path().join("user.preferences"), "ui.scale:1\n")
        .expect("fixture file should be written");
    context.reload_preferences().expect("preferences reload should succeed");
    fs::write(dir.path().join("user.preferences"), "ui.scale:2\n")
        .expect("fixture file should be written");
    context.reload_preferences().expect("preferences reload should succeed");
    assert_eq!(context.preferences().value("ui", "scale"), Some("2"));

    fs::create_dir(dir.path().join("lang")).expect("lang dir should be created");
    fs::write(dir.path().join("lang").join("en.core.lang"), "Greeting:Hi\n")
        .expect("fixture file should be written");
    fs::write(dir.path().join("lang").join("de.core.lang"), "Greeting:Hallo\n")
        .expect("fixture file should be written");
    context.set_language("en.core.lang").expect("language switch should succeed");
    context.set_language("de.core.lang").expect("language switch should succeed");
    assert_eq!(context.translations().get("Greeting"), "Hallo");
}

#[test]
fn each_context_has_its_own_registry() {
    let first = CoreContext::new(CoreSettings::default());
    let second = CoreContext::new(CoreSettings::default());

    Component::new(first.registry(), "Main", DisplayMetadata::empty())
        .expect("component should construct");
    Component::new(second.registry(), "Main", DisplayMetadata::empty())
        .expect("component should construct");
    assert!(Component::new(first.registry(), "Main", DisplayMetadata::empty()).is_err());
}
