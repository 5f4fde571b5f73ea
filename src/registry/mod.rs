//! Registry module - data owned by the host application
//!
//! - `types` - script states and registry entries (serde shapes)
//! - `subscription` - push-based category/label feeds and their slots

mod subscription;
mod types;

pub use subscription::{RegistryCallback, RegistryConnection, RegistrySlot, Subscription};
pub use types::{
    CategoryRegistryEntry, EntityRegistryEntry, LabelRegistryEntry, ScriptAttributes,
    ScriptConfig, ScriptEntity, SCRIPT_DOMAIN, UNAVAILABLE,
};

/// Find the registry entry for an entity id.
pub fn find_entry<'a>(
    registry: &'a [EntityRegistryEntry],
    entity_id: &str,
) -> Option<&'a EntityRegistryEntry> {
    registry.iter().find(|entry| entry.entity_id == entity_id)
}
