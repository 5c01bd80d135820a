use trics_core::{Component, DisplayMetadata, Displayable, IdentityRegistry, TagSet};

fn component_with_tags(registry: &IdentityRegistry, id: &str, tags: &[&str]) -> Component {
    Component::with_tags(registry, id, DisplayMetadata::new(None, None), tags)
        .expect("tagged component should construct")
}

#[test]
fn widget_keeps_first_spelling_of_red() {
    let registry = IdentityRegistry::new();
    let mut widget = component_with_tags(&registry, "Widget1", &["Red"]);

    assert!(!widget.tag("red"));
    assert_eq!(widget.tags(), vec!["Red".to_string()]);
    assert_eq!(widget.display_name(), "");
}

#[test]
fn tagging_is_idempotent_under_case() {
    let registry = IdentityRegistry::new();
    let mut item = component_with_tags(&registry, "Item", &[]);

    assert!(item.tag("Red"));
    assert!(!item.tag("red"));
    assert!(!item.tag("RED"));
    assert_eq!(item.tags(), vec!["Red".to_string()]);
}

#[test]
fn untagging_is_symmetric_under_case() {
    let registry = IdentityRegistry::new();
    let mut item = component_with_tags(&registry, "Item", &[]);
    item.tag("Red");

    assert!(item.untag("RED"));
    assert!(!item.untag("red"));
    assert!(!item.is_tagged("Red"));
    assert!(item.tags().is_empty());
}

#[test]
fn is_tagged_ignores_case_and_order_is_kept() {
    let registry = IdentityRegistry::new();
    let mut item = component_with_tags(&registry, "Item", &["beta", "Alpha", "BETA", "gamma"]);

    assert_eq!(item.tags(), vec!["beta", "Alpha", "gamma"]);
    assert!(item.is_tagged("ALPHA"));
    assert!(!item.is_tagged("delta"));

    assert!(item.untag("alpha"));
    assert!(item.tag("Delta"));
    assert_eq!(item.tags(), vec!["beta", "gamma", "Delta"]);
}

#[test]
fn tags_accept_any_text() {
    let mut set = TagSet::new();
    assert!(set.tag(""));
    assert!(set.tag("needs review"));
    assert!(set.tag("v1.2"));
    assert!(!set.tag("NEEDS REVIEW"));
    assert_eq!(set.len(), 3);
}

#[test]
fn tag_snapshot_does_not_track_later_changes() {
    let registry = IdentityRegistry::new();
    let mut item = component_with_tags(&registry, "Item", &["one"]);
    let snapshot = item.tags();

    item.tag("two");
    assert_eq!(snapshot, vec!["one"]);
    assert_eq!(item.tag_set().iter().collect::<Vec<_>>(), vec!["one", "two"]);
}

#[test]
fn greek_sigma_and_long_s_collapse_with_their_plain_forms() {
    let mut set = TagSet::new();
    assert!(set.tag("Σ"));
    assert!(!set.tag("ς"));
    assert!(!set.tag("σ"));
    assert!(set.tag("S"));
    assert!(!set.tag("ſ"));
    assert_eq!(set.tags(), vec!["Σ", "S"]);
    assert!(set.untag("ſ"));
    assert_eq!(set.tags(), vec!["Σ"]);
}
