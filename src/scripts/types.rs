//! View-model types
//!
//! A `ScriptItem` is a script state enriched with the display name and the
//! category/label names resolved from the registries. Items are derived on
//! every input change and never persisted.

use chrono::{DateTime, Utc};

use crate::registry::{LabelRegistryEntry, ScriptEntity};

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptItem {
    pub entity: ScriptEntity,
    /// Display name (friendly name or humanized object id)
    pub name: String,
    pub last_triggered: Option<DateTime<Utc>>,
    /// Resolved category name in the script scope
    pub category: Option<String>,
    pub labels: Vec<LabelRegistryEntry>,
}

impl ScriptItem {
    pub fn entity_id(&self) -> &str {
        &self.entity.entity_id
    }

    pub fn is_unavailable(&self) -> bool {
        self.entity.is_unavailable()
    }

    /// Label names joined by spaces, as used by the hidden search column
    pub fn label_text(&self) -> String {
        self.labels
            .iter()
            .map(|label| label.name.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
