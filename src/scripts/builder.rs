//! View-model builder
//!
//! Turns raw script states plus registry lookups into `ScriptItem`s.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::debug_panic;
use crate::filters::FilteredScripts;
use crate::registry::{
    find_entry, CategoryRegistryEntry, EntityRegistryEntry, LabelRegistryEntry, ScriptEntity,
};

use super::types::ScriptItem;

/// Display name of a script state.
///
/// Uses the `friendly_name` attribute when present, otherwise the object id
/// of the entity id with underscores replaced by spaces.
pub fn compute_state_name(script: &ScriptEntity) -> String {
    if let Some(name) = &script.attributes.friendly_name {
        return name.clone();
    }
    let object_id = script
        .entity_id
        .split_once('.')
        .map_or(script.entity_id.as_str(), |(_, object_id)| object_id);
    object_id.replace('_', " ")
}

fn resolve_labels(
    label_ids: &[String],
    label_registry: &[LabelRegistryEntry],
    entity_id: &str,
) -> Vec<LabelRegistryEntry> {
    let mut labels = Vec::with_capacity(label_ids.len());
    for label_id in label_ids {
        match label_registry.iter().find(|label| &label.label_id == label_id) {
            Some(label) => labels.push(label.clone()),
            None => {
                debug_panic!(
                    "Label '{}' of {} is missing from the label registry",
                    label_id,
                    entity_id
                );
            }
        }
    }
    labels
}

/// Build display rows.
///
/// `EmptyMatch` yields no rows; `Matches` restricts to the listed entity
/// ids; `NoFilter` keeps every script. Input order is preserved. Registries
/// that have not been pushed yet (`None`) resolve to no category and no
/// labels.
#[instrument(level = "debug", skip_all, fields(scripts = scripts.len()))]
pub fn build_script_items(
    scripts: &[ScriptEntity],
    entity_registry: &[EntityRegistryEntry],
    category_registry: Option<&[CategoryRegistryEntry]>,
    label_registry: Option<&[LabelRegistryEntry]>,
    filtered: &FilteredScripts,
) -> Vec<ScriptItem> {
    let allowed: Option<HashSet<&str>> = match filtered {
        FilteredScripts::EmptyMatch => return Vec::new(),
        FilteredScripts::NoFilter => None,
        FilteredScripts::Matches(ids) => Some(ids.iter().map(String::as_str).collect()),
    };

    let items: Vec<ScriptItem> = scripts
        .iter()
        .filter(|script| {
            allowed
                .as_ref()
                .map_or(true, |allowed| allowed.contains(script.entity_id.as_str()))
        })
        .map(|script| {
            let entry = find_entry(entity_registry, &script.entity_id);

            let category = entry
                .and_then(EntityRegistryEntry::script_category)
                .and_then(|category_id| {
                    category_registry?
                        .iter()
                        .find(|category| category.category_id == category_id)
                        .map(|category| category.name.clone())
                });

            let labels = match (label_registry, entry) {
                (Some(registry), Some(entry)) => {
                    resolve_labels(&entry.labels, registry, &script.entity_id)
                }
                _ => Vec::new(),
            };

            ScriptItem {
                entity: script.clone(),
                name: compute_state_name(script),
                last_triggered: script.attributes.last_triggered,
                category,
                labels,
            }
        })
        .collect();

    debug!(rows = items.len(), "Script items built");
    items
}
