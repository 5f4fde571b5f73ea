//! Filter intersection
//!
//! Folds every active filter into one set of permitted entity ids. The seed
//! is "unconstrained" (`None`), not an empty set: the first contributing
//! filter replaces the seed and every later one intersects with it.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::registry::{find_entry, EntityRegistryEntry, ScriptEntity};

use super::types::{FilterSource, FilterState, FilteredScripts};

fn intersect_into(acc: Option<HashSet<String>>, items: HashSet<String>) -> HashSet<String> {
    match acc {
        None => items,
        Some(acc) => acc.into_iter().filter(|id| items.contains(id)).collect(),
    }
}

/// Scripts whose script-scope category is `category_id`
pub fn scripts_in_category(
    category_id: &str,
    scripts: &[ScriptEntity],
    entity_registry: &[EntityRegistryEntry],
) -> HashSet<String> {
    scripts
        .iter()
        .filter(|script| {
            find_entry(entity_registry, &script.entity_id)
                .and_then(EntityRegistryEntry::script_category)
                == Some(category_id)
        })
        .map(|script| script.entity_id.clone())
        .collect()
}

/// Scripts carrying at least one of `label_ids`
pub fn scripts_with_any_label(
    label_ids: &[String],
    scripts: &[ScriptEntity],
    entity_registry: &[EntityRegistryEntry],
) -> HashSet<String> {
    scripts
        .iter()
        .filter(|script| {
            find_entry(entity_registry, &script.entity_id)
                .is_some_and(|entry| entry.labels.iter().any(|l| label_ids.contains(l)))
        })
        .map(|script| script.entity_id.clone())
        .collect()
}

/// Combine all filter panes into the filtered result.
///
/// Panes with a precomputed `items` set contribute exactly that set. A
/// category pane (first selected value) or label pane (any selected value)
/// without one is resolved against the entity registry.
#[instrument(level = "debug", skip_all, fields(sources = state.len()))]
pub fn apply_filters(
    state: &FilterState,
    scripts: &[ScriptEntity],
    entity_registry: &[EntityRegistryEntry],
) -> FilteredScripts {
    let mut acc: Option<HashSet<String>> = None;

    for (source, filter) in state {
        if let Some(items) = &filter.items {
            acc = Some(intersect_into(acc, items.clone()));
            continue;
        }

        let selected = match &filter.value {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        match source {
            FilterSource::Categories => {
                let matches = scripts_in_category(&selected[0], scripts, entity_registry);
                acc = Some(intersect_into(acc, matches));
            }
            FilterSource::Labels => {
                let matches = scripts_with_any_label(selected, scripts, entity_registry);
                acc = Some(intersect_into(acc, matches));
            }
            _ => {}
        }
    }

    let result = match acc {
        None => FilteredScripts::NoFilter,
        Some(ids) => FilteredScripts::from_ids(ids.into_iter().collect()),
    };

    debug!(
        active = result.is_active(),
        matched = result.ids().map_or(0, <[String]>::len),
        "Filters applied"
    );

    result
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
