use super::*;
use crate::filters::FilterValue;
use crate::registry::SCRIPT_DOMAIN;

fn scripts(ids: &[&str]) -> Vec<ScriptEntity> {
    ids.iter().map(|id| ScriptEntity::new(*id, "off")).collect()
}

fn fixture() -> (Vec<ScriptEntity>, Vec<EntityRegistryEntry>) {
    let scripts = scripts(&["script.a", "script.b", "script.c", "script.d", "script.e"]);
    let registry = vec![
        EntityRegistryEntry::new("script.a", "a").with_category(SCRIPT_DOMAIN, "lights"),
        EntityRegistryEntry::new("script.b", "b")
            .with_category(SCRIPT_DOMAIN, "lights")
            .with_labels(["evening"]),
        EntityRegistryEntry::new("script.c", "c")
            .with_category(SCRIPT_DOMAIN, "lights")
            .with_labels(["morning", "evening"]),
        EntityRegistryEntry::new("script.d", "d")
            .with_category(SCRIPT_DOMAIN, "climate")
            .with_labels(["morning"]),
        // script.e is not in the registry
    ];
    (scripts, registry)
}

fn ids(result: &FilteredScripts) -> Vec<&str> {
    result
        .ids()
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
        .collect()
}

#[test]
fn test_no_filters_yields_no_filter() {
    let (scripts, registry) = fixture();
    let state = FilterState::new();
    assert_eq!(apply_filters(&state, &scripts, &registry), FilteredScripts::NoFilter);
}

#[test]
fn test_cleared_values_yield_no_filter() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(FilterSource::Labels, FilterValue::selected(Vec::<String>::new()));
    state.insert(FilterSource::Devices, FilterValue::default());
    assert_eq!(apply_filters(&state, &scripts, &registry), FilteredScripts::NoFilter);
}

#[test]
fn test_single_precomputed_filter_seeds_result() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Devices,
        FilterValue::with_items(["device1"], ["script.a", "script.d"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.a", "script.d"]);
}

#[test]
fn test_disjoint_precomputed_filters_yield_empty_match() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Devices,
        FilterValue::with_items(["device1"], ["script.a", "script.b"]),
    );
    state.insert(
        FilterSource::FloorAreas,
        FilterValue::with_items(["kitchen"], ["script.c", "script.d"]),
    );
    assert_eq!(
        apply_filters(&state, &scripts, &registry),
        FilteredScripts::EmptyMatch
    );
}

#[test]
fn test_category_filter_uses_first_selected_value() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Categories,
        FilterValue::selected(["climate", "lights"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.d"]);
}

#[test]
fn test_label_filter_matches_any_selected_label() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(FilterSource::Labels, FilterValue::selected(["morning"]));
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.c", "script.d"]);
}

#[test]
fn test_category_and_label_filters_intersect() {
    // category -> {a, b, c}, labels -> {b, c, d}
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(FilterSource::Categories, FilterValue::selected(["lights"]));
    state.insert(
        FilterSource::Labels,
        FilterValue::selected(["evening", "morning"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.b", "script.c"]);
}

#[test]
fn test_unknown_label_yields_empty_match_not_everything() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(FilterSource::Labels, FilterValue::selected(["nope"]));
    assert_eq!(
        apply_filters(&state, &scripts, &registry),
        FilteredScripts::EmptyMatch
    );
}

#[test]
fn test_unregistered_scripts_never_match_registry_filters() {
    let (scripts, registry) = fixture();
    let found = scripts_with_any_label(&["morning".to_string()], &scripts, &registry);
    assert!(!found.contains("script.e"));
    assert!(scripts_in_category("lights", &scripts, &registry).len() == 3);
}

#[test]
fn test_blueprint_items_intersect_with_labels() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Blueprints,
        FilterValue::with_items(["motion.yaml"], ["script.c", "script.e"]),
    );
    state.insert(FilterSource::Labels, FilterValue::selected(["evening"]));
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.c"]);
}

#[test]
fn test_label_pane_with_items_skips_registry_scan() {
    // script.a matches through a device label, not its own entry
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Labels,
        FilterValue::with_items(["evening"], ["script.a", "script.b"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.a", "script.b"]);
}

#[test]
fn test_category_pane_with_items_skips_registry_scan() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Categories,
        FilterValue::with_items(["climate"], ["script.a"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.a"]);
}

#[test]
fn test_label_pane_items_still_intersect_other_panes() {
    let (scripts, registry) = fixture();
    let mut state = FilterState::new();
    state.insert(
        FilterSource::Labels,
        FilterValue::with_items(["evening"], ["script.a", "script.b"]),
    );
    state.insert(FilterSource::Categories, FilterValue::selected(["lights"]));
    state.insert(
        FilterSource::Devices,
        FilterValue::with_items(["lamp"], ["script.a", "script.d"]),
    );
    let result = apply_filters(&state, &scripts, &registry);
    assert_eq!(ids(&result), vec!["script.a"]);
}
