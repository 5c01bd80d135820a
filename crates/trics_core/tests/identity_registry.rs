use std::sync::atomic::{AtomicUsize, Ordering};
use trics_core::{
    Component, DisplayMetadata, Identity, IdentityRegistry, IdentityRejection, ModelError,
};

#[test]
fn letter_and_number_ids_register_once() {
    let registry = IdentityRegistry::new();
    for id in ["Widget1", "count", "Größe", "数据2", "٣٤", ""] {
        registry.register(id).expect("identity should register");
        let err = registry.register(id).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidIdentity {
                id: id.to_string(),
                reason: IdentityRejection::AlreadyRegistered,
            }
        );
    }
    assert_eq!(registry.len(), 6);
}

#[test]
fn ids_with_non_letter_characters_are_always_rejected() {
    let registry = IdentityRegistry::new();
    for id in [
        "two words",
        "dotted.id",
        "snake_case",
        "kebab-case",
        "tab\there",
        "new\nline",
        "nul\u{0}",
        "plus+",
        "emoji😀",
        "nbsp\u{a0}",
    ] {
        for _ in 0..2 {
            let err = registry.register(id).unwrap_err();
            assert_eq!(
                err,
                ModelError::InvalidIdentity {
                    id: id.to_string(),
                    reason: IdentityRejection::Malformed,
                }
            );
        }
        assert!(!registry.validate(id));
        assert!(!registry.contains(id));
    }
    assert!(registry.is_empty());
}

#[test]
fn empty_identifier_is_valid() {
    let registry = IdentityRegistry::new();
    assert!(registry.validate(""));
    let identity = Identity::new(&registry, "").expect("identity should register");
    assert_eq!(identity.as_str(), "");
}

#[test]
fn separate_registries_do_not_share_state() {
    let first = IdentityRegistry::new();
    let second = IdentityRegistry::new();
    Identity::new(&first, "shared").expect("identity should register");
    Identity::new(&second, "shared").expect("identity should register");
    assert!(first.contains("shared"));
    assert!(second.contains("shared"));
}

#[test]
fn concurrent_registration_of_one_id_succeeds_exactly_once() {
    let registry = IdentityRegistry::new();
    let successes = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for _ in 0..16 {
            scope.spawn(|| {
                if registry.register("contested").is_ok() {
                    successes.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
    });

    assert_eq!(successes.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn case_variants_register_separately_but_compare_equal() {
    let registry = IdentityRegistry::new();
    let abc = Component::new(&registry, "abc", DisplayMetadata::empty())
        .expect("component should construct");
    let upper = Component::new(&registry, "ABC", DisplayMetadata::empty())
        .expect("component should construct");

    assert!(registry.contains("abc"));
    assert!(registry.contains("ABC"));
    assert!(abc == "ABC");
    assert_eq!(abc, upper);
    assert_eq!(abc.id(), upper.id());
}

#[test]
fn sigma_variants_compare_equal() {
    let registry = IdentityRegistry::new();
    let capital = Identity::new(&registry, "ΣΟΦΙΑ").expect("capital sigma id registers");
    let final_form = Identity::new(&registry, "σοφιας").expect("final sigma id registers");

    assert!(capital == "σοφια");
    assert!(capital == "ΣΟΦΙΑ");
    assert_ne!(capital, final_form);
    assert!(final_form == "ΣΟΦΙΑΣ");
}

#[test]
fn failed_component_construction_reports_identity_error() {
    let registry = IdentityRegistry::new();
    Component::new(&registry, "Panel", DisplayMetadata::empty())
        .expect("component should construct");

    let duplicate = Component::new(&registry, "Panel", DisplayMetadata::empty()).unwrap_err();
    assert!(matches!(
        duplicate,
        ModelError::InvalidIdentity {
            reason: IdentityRejection::AlreadyRegistered,
            ..
        }
    ));

    let malformed =
        Component::with_tags(&registry, "main panel", DisplayMetadata::empty(), ["x"]).unwrap_err();
    assert!(matches!(
        malformed,
        ModelError::InvalidIdentity {
            reason: IdentityRejection::Malformed,
            ..
        }
    ));
    assert!(!registry.contains("main panel"));
}
