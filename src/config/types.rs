//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::columns::LocaleSettings;

use super::defaults::*;

/// Picker settings. Every field is optional; getters supply defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocaleSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_cutoff_days: Option<i64>,
    /// Start in the narrow (mobile) layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrow: Option<bool>,
    /// Backend components reported as loaded (e.g. "blueprint")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_components: Option<Vec<String>>,
}

impl PickerConfig {
    pub fn get_locale(&self) -> LocaleSettings {
        self.locale.clone().unwrap_or_default()
    }

    pub fn get_documentation_base_url(&self) -> &str {
        self.documentation_base_url
            .as_deref()
            .unwrap_or(DEFAULT_DOCUMENTATION_BASE_URL)
    }

    /// Absolute documentation URL for `path` (e.g. "/docs/scripts/")
    pub fn documentation_url(&self, path: &str) -> String {
        format!(
            "{}{}",
            self.get_documentation_base_url().trim_end_matches('/'),
            path
        )
    }

    /// Negative values are clamped to zero
    pub fn get_relative_time_cutoff_days(&self) -> i64 {
        self.relative_time_cutoff_days
            .unwrap_or(DEFAULT_RELATIVE_TIME_CUTOFF_DAYS)
            .max(0)
    }

    pub fn get_narrow(&self) -> bool {
        self.narrow.unwrap_or(DEFAULT_NARROW)
    }

    pub fn is_component_loaded(&self, component: &str) -> bool {
        self.loaded_components
            .as_ref()
            .is_some_and(|loaded| loaded.iter().any(|c| c == component))
    }
}
