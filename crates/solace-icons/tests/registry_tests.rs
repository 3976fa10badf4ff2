//! Integration tests for the aggregated registry and its core subset.

use std::collections::HashSet;
use std::ptr;

use solace_icons::collections;
use solace_icons::subset::{core, SubsetRegistry, CORE_ICONS};
use solace_icons::{builtin, Error, IconCategory, IconName};
use solace_theme::{ResolvedProps, ThemeContext, TherapeuticTheme, Variant};

#[test]
fn builtin_registry_aggregates_every_authored_icon() {
    // Eight collections author 136 definitions; the declared alert-circle
    // override collapses two of those into one entry.
    assert_eq!(builtin().len(), 135);
}

#[test]
fn category_counts_reflect_the_declared_override() {
    let count = |category| builtin().names_in_category(category).len();

    assert_eq!(count(IconCategory::Health), 20);
    // The interface collection authors 26 icons, but its alert-circle is
    // categorized under status in the aggregated registry.
    assert_eq!(count(IconCategory::Interface), 25);
    assert_eq!(count(IconCategory::Navigation), 13);
    assert_eq!(count(IconCategory::Charts), 14);
    assert_eq!(count(IconCategory::Communication), 16);
    assert_eq!(count(IconCategory::Status), 13);
    assert_eq!(count(IconCategory::Mindfulness), 20);
    assert_eq!(count(IconCategory::Arrows), 14);
}

#[test]
fn category_listings_cover_the_whole_registry() {
    let registry = builtin();
    let total: usize = IconCategory::ALL
        .iter()
        .map(|&category| registry.names_in_category(category).len())
        .sum();
    assert_eq!(total, registry.len());
}

#[test]
fn every_registered_icon_renders_in_both_variants() {
    let registry = builtin();
    let context = ThemeContext::standard();

    for variant in [Variant::Outline, Variant::Filled] {
        let props = ResolvedProps::derive(24.0, 2.0, None, None, variant, &context);
        for name in registry.names() {
            let def = registry.resolve(&name).unwrap();
            let tree = def.render(&props);
            assert!(!tree.is_empty(), "{name} drew nothing ({variant})");
            assert_eq!(tree.view_box, 24.0, "{name} left the design grid");
        }
    }
}

#[test]
fn registry_names_are_sorted_and_unique() {
    let names = builtin().names();

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    let unique: HashSet<&str> = names.iter().map(IconName::as_str).collect();
    assert_eq!(unique.len(), names.len());
}

#[test]
fn alert_circle_resolves_to_the_status_rendition() {
    let registry = builtin();
    let name = IconName::new(IconName::ALERT_CIRCLE);

    assert_eq!(registry.category_of(&name), Some(IconCategory::Status));
    assert_eq!(
        registry.suggested_theme(&name),
        Some(TherapeuticTheme::Energizing)
    );

    let resolved = registry.resolve(&name).unwrap().renderer();
    let status = collections::status::collection();
    let interface = collections::interface::collection();
    assert!(ptr::fn_addr_eq(
        resolved,
        status.get(&name).unwrap().renderer()
    ));
    assert!(!ptr::fn_addr_eq(
        resolved,
        interface.get(&name).unwrap().renderer()
    ));
}

#[test]
fn suggested_themes_follow_the_owning_collection() {
    let registry = builtin();
    let theme = |name: &str| registry.suggested_theme(&IconName::new(name));

    assert_eq!(theme("heart"), Some(TherapeuticTheme::Calming));
    assert_eq!(theme("home"), Some(TherapeuticTheme::Peaceful));
    assert_eq!(theme("compass"), Some(TherapeuticTheme::Grounding));
    assert_eq!(theme("chart-bar"), Some(TherapeuticTheme::Focus));
    assert_eq!(theme("message-circle"), Some(TherapeuticTheme::Nurturing));
    assert_eq!(theme("breathing"), Some(TherapeuticTheme::Grounding));
    assert_eq!(theme("arrow-right"), Some(TherapeuticTheme::Focus));
    assert_eq!(theme("no-such-icon"), None);
}

#[test]
fn core_subset_shares_the_full_registry_renderers() {
    let subset = core();
    assert_eq!(subset.len(), CORE_ICONS.len());

    for name in CORE_ICONS {
        let name = IconName::new(name);
        let projected = subset.resolve(&name).unwrap().renderer();
        let full = builtin().resolve(&name).unwrap().renderer();
        assert!(ptr::fn_addr_eq(projected, full), "{name} diverged");
    }
}

#[test]
fn core_subset_includes_the_global_fallback() {
    assert!(core().is_available(&IconName::new(IconName::HELP_CIRCLE)));
}

#[test]
fn subset_projection_fails_fast_on_unknown_names() {
    // This is what a rename in a collection looks like to a stale
    // allow-list.
    let err = SubsetRegistry::project(builtin(), ["heart", "hart"]).unwrap_err();
    match err {
        Error::UnknownSubsetIcon { name } => assert_eq!(name, "hart"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn subset_misses_names_the_full_registry_has() {
    let subset = core();
    let full_only = IconName::new("mood-happy");

    assert!(builtin().contains(&full_only));
    assert!(!subset.is_available(&full_only));
    assert!(subset.resolve(&full_only).is_none());
}
