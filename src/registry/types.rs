//! Registry data types
//!
//! Read-only shapes pushed by the host: script states, entity registry
//! entries, and the category/label registries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State value the backend reports for scripts it cannot reach
pub const UNAVAILABLE: &str = "unavailable";

/// Registry domain used for category assignments of scripts
pub const SCRIPT_DOMAIN: &str = "script";

/// Attributes carried on a script state object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_triggered: Option<DateTime<Utc>>,
    /// Everything else the backend attaches (mode, current runs, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Remote state object of a script entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEntity {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: ScriptAttributes,
}

impl ScriptEntity {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: ScriptAttributes::default(),
        }
    }

    pub fn with_friendly_name(mut self, name: impl Into<String>) -> Self {
        self.attributes.friendly_name = Some(name.into());
        self
    }

    pub fn with_last_triggered(mut self, at: DateTime<Utc>) -> Self {
        self.attributes.last_triggered = Some(at);
        self
    }

    pub fn is_unavailable(&self) -> bool {
        self.state == UNAVAILABLE
    }
}

/// Entity registry entry: maps an entity id to its stable unique id plus
/// organisational metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRegistryEntry {
    pub entity_id: String,
    pub unique_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// Category assignment keyed by scope (e.g. "script")
    #[serde(default)]
    pub categories: HashMap<String, String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl EntityRegistryEntry {
    pub fn new(entity_id: impl Into<String>, unique_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            unique_id: unique_id.into(),
            platform: None,
            categories: HashMap::new(),
            labels: Vec::new(),
        }
    }

    pub fn with_category(mut self, scope: &str, category_id: impl Into<String>) -> Self {
        self.categories.insert(scope.to_string(), category_id.into());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Category assigned in the script scope, if any
    pub fn script_category(&self) -> Option<&str> {
        self.categories.get(SCRIPT_DOMAIN).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRegistryEntry {
    pub category_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CategoryRegistryEntry {
    pub fn new(category_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            name: name.into(),
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRegistryEntry {
    pub label_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LabelRegistryEntry {
    pub fn new(label_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label_id: label_id.into(),
            name: name.into(),
            icon: None,
            color: None,
            description: None,
        }
    }
}

/// Script configuration as returned by the backend (file-based or
/// state-derived). Only the alias is interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

impl ScriptConfig {
    pub fn with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            rest: serde_json::Map::new(),
        }
    }
}
