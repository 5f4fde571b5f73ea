//! Offline host backed by a JSON snapshot
//!
//! Answers remote calls from the snapshot and records UI side effects as
//! text lines instead of drawing anything. Used by the `script-picker`
//! binary to exercise the picker without a running backend.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::PickerConfig;
use crate::error::{PickerError, RemoteError};
use crate::registry::{
    CategoryRegistryEntry, EntityRegistryEntry, LabelRegistryEntry, RegistryCallback,
    RegistryConnection, ScriptConfig, ScriptEntity, Subscription,
};
use crate::scripts::compute_state_name;

use super::{
    AlertDialog, AssignCategoryDialog, Collaborators, ConfirmationDialog, Dialogs, HostContext,
    HostEvents, NewAutomationMode, Navigator, RelatedSearch, ScriptBackend, Toast, Toasts,
};

/// Registry data and backend answers captured from a live system
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub scripts: Vec<ScriptEntity>,
    pub entity_registry: Vec<EntityRegistryEntry>,
    pub categories: Vec<CategoryRegistryEntry>,
    pub labels: Vec<LabelRegistryEntry>,
    /// item id -> related kind -> entity ids
    pub related: HashMap<String, HashMap<String, Vec<String>>>,
    /// unique id -> config stored in the scripts file
    pub script_configs: HashMap<String, ScriptConfig>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read a snapshot file
pub fn load_snapshot(path: &Path) -> Result<Snapshot, PickerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PickerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Snapshot::from_json(&contents)
}

/// Host services answered from a `Snapshot`
pub struct SnapshotHost {
    snapshot: Snapshot,
    config: PickerConfig,
    assume_yes: bool,
    effects: Mutex<Vec<String>>,
}

impl SnapshotHost {
    pub fn new(snapshot: Snapshot, config: PickerConfig) -> Self {
        Self {
            snapshot,
            config,
            assume_yes: false,
            effects: Mutex::new(Vec::new()),
        }
    }

    /// Answer confirmation dialogs with "yes"
    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators {
            backend: self.clone(),
            search: self.clone(),
            dialogs: self.clone(),
            navigator: self.clone(),
            toasts: self.clone(),
            events: self.clone(),
            context: self.clone(),
        }
    }

    /// Side effects recorded so far, oldest first. Clears the record.
    pub fn take_effects(&self) -> Vec<String> {
        std::mem::take(&mut *self.effects.lock())
    }

    fn record(&self, effect: String) {
        info!(event_type = "host_effect", effect = %effect, "Host effect");
        self.effects.lock().push(effect);
    }

    fn is_registered(&self, unique_id: &str) -> bool {
        self.snapshot
            .entity_registry
            .iter()
            .any(|entry| entry.unique_id == unique_id)
    }
}

fn not_found(what: &str, id: &str) -> RemoteError {
    RemoteError::new(404, format!("{} '{}' not found", what, id))
}

#[async_trait]
impl ScriptBackend for SnapshotHost {
    async fn trigger_script(&self, unique_id: &str) -> Result<(), RemoteError> {
        if !self.is_registered(unique_id) {
            return Err(not_found("script", unique_id));
        }
        self.record(format!("trigger {}", unique_id));
        Ok(())
    }

    /// Only scripts stored in the scripts file can be deleted
    async fn delete_script(&self, unique_id: &str) -> Result<(), RemoteError> {
        if !self.snapshot.script_configs.contains_key(unique_id) {
            return Err(RemoteError::new(
                400,
                format!("script '{}' is not stored in the scripts file", unique_id),
            ));
        }
        self.record(format!("delete {}", unique_id));
        Ok(())
    }

    async fn fetch_script_file_config(&self, unique_id: &str) -> Result<ScriptConfig, RemoteError> {
        self.snapshot
            .script_configs
            .get(unique_id)
            .cloned()
            .ok_or_else(|| not_found("config", unique_id))
    }

    async fn get_script_state_config(&self, entity_id: &str) -> Result<ScriptConfig, RemoteError> {
        self.snapshot
            .scripts
            .iter()
            .find(|script| script.entity_id == entity_id)
            .map(|script| ScriptConfig::with_alias(compute_state_name(script)))
            .ok_or_else(|| not_found("state", entity_id))
    }
}

#[async_trait]
impl RelatedSearch for SnapshotHost {
    async fn find_related(
        &self,
        item_kind: &str,
        item_id: &str,
    ) -> Result<HashMap<String, Vec<String>>, RemoteError> {
        self.record(format!("find_related {} {}", item_kind, item_id));
        Ok(self
            .snapshot
            .related
            .get(item_id)
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl Dialogs for SnapshotHost {
    async fn alert(&self, dialog: AlertDialog) {
        let mut line = String::from("alert");
        if let Some(title) = &dialog.title {
            line.push_str(&format!(" [{}]", title));
        }
        line.push_str(&format!(" {}", dialog.text));
        if let Some((label, url)) = &dialog.link {
            line.push_str(&format!(" ({}: {})", label, url));
        }
        self.record(line);
    }

    async fn confirm(&self, dialog: ConfirmationDialog) -> bool {
        let answer = if self.assume_yes {
            &dialog.confirm_text
        } else {
            &dialog.dismiss_text
        };
        self.record(format!(
            "confirm [{}] {} -> {}",
            dialog.title, dialog.text, answer
        ));
        self.assume_yes
    }

    fn assign_category(&self, dialog: AssignCategoryDialog) {
        self.record(format!(
            "assign_category {} ({})",
            dialog.entry.entity_id, dialog.scope
        ));
    }

    fn new_automation(&self, mode: NewAutomationMode) {
        self.record(format!("new_automation {:?}", mode));
    }

    fn open_script_editor(&self, config: ScriptConfig) {
        self.record(format!(
            "open_editor {}",
            config.alias.as_deref().unwrap_or_default()
        ));
    }
}

impl Navigator for SnapshotHost {
    fn navigate(&self, path: &str) {
        self.record(format!("navigate {}", path));
    }
}

impl Toasts for SnapshotHost {
    fn show_toast(&self, toast: Toast) {
        self.record(format!("toast {}", toast.message));
    }
}

impl HostEvents for SnapshotHost {
    fn show_more_info(&self, entity_id: &str) {
        self.record(format!("more_info {}", entity_id));
    }
}

impl HostContext for SnapshotHost {
    fn is_component_loaded(&self, component: &str) -> bool {
        self.config.is_component_loaded(component)
    }
}

/// Registry feeds that deliver the snapshot once, on subscribe
pub struct SnapshotConnection {
    categories: Vec<CategoryRegistryEntry>,
    labels: Vec<LabelRegistryEntry>,
}

impl SnapshotConnection {
    pub fn new(snapshot: &Snapshot) -> Self {
        Self {
            categories: snapshot.categories.clone(),
            labels: snapshot.labels.clone(),
        }
    }
}

impl RegistryConnection for SnapshotConnection {
    fn subscribe_categories(
        &self,
        _scope: &str,
        callback: RegistryCallback<CategoryRegistryEntry>,
    ) -> Subscription {
        callback(self.categories.clone());
        Subscription::noop()
    }

    fn subscribe_labels(&self, callback: RegistryCallback<LabelRegistryEntry>) -> Subscription {
        callback(self.labels.clone());
        Subscription::noop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::find_entry;

    const SNAPSHOT: &str = r#"{
        "scripts": [
            {"entity_id": "script.wake_up", "state": "off", "attributes": {"friendly_name": "Wake up"}},
            {"entity_id": "script.legacy", "state": "off", "attributes": {}}
        ],
        "entity_registry": [
            {"entity_id": "script.wake_up", "unique_id": "wake_up", "platform": "script",
             "categories": {"script": "c1"}, "labels": ["l1"]}
        ],
        "categories": [{"category_id": "c1", "name": "Morning"}],
        "labels": [{"label_id": "l1", "name": "Daily"}],
        "related": {"motion.yaml": {"script": ["script.wake_up"]}},
        "script_configs": {"wake_up": {"alias": "Wake up", "sequence": []}}
    }"#;

    fn host() -> SnapshotHost {
        SnapshotHost::new(Snapshot::from_json(SNAPSHOT).unwrap(), PickerConfig::default())
    }

    #[test]
    fn test_snapshot_parses_and_defaults_missing_sections() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.scripts.len(), 2);
        assert_eq!(
            find_entry(&snapshot.entity_registry, "script.wake_up").map(|e| e.unique_id.as_str()),
            Some("wake_up")
        );

        let empty = Snapshot::from_json("{}").unwrap();
        assert_eq!(empty, Snapshot::default());
    }

    #[test]
    fn test_invalid_snapshot_is_a_parse_error() {
        assert!(matches!(
            Snapshot::from_json("[]"),
            Err(PickerError::SnapshotParse(_))
        ));
    }

    #[tokio::test]
    async fn test_backend_answers_from_snapshot() {
        let host = host();
        assert!(host.trigger_script("wake_up").await.is_ok());
        assert!(host.trigger_script("nope").await.unwrap_err().is_not_found());

        let config = host.fetch_script_file_config("wake_up").await.unwrap();
        assert_eq!(config.alias.as_deref(), Some("Wake up"));
        assert!(config.rest.contains_key("sequence"));

        let state = host.get_script_state_config("script.legacy").await.unwrap();
        assert_eq!(state.alias.as_deref(), Some("legacy"));
    }

    #[tokio::test]
    async fn test_delete_outside_scripts_file_is_bad_request() {
        let host = host();
        assert!(host.delete_script("legacy").await.unwrap_err().is_bad_request());
        assert!(host.delete_script("wake_up").await.is_ok());
        assert_eq!(host.take_effects(), vec!["delete wake_up".to_string()]);
    }

    #[tokio::test]
    async fn test_confirm_follows_assume_yes() {
        let dialog = ConfirmationDialog {
            title: "Delete script?".to_string(),
            text: "Gone".to_string(),
            confirm_text: "Delete".to_string(),
            dismiss_text: "Cancel".to_string(),
            destructive: true,
        };
        let host = host();
        assert!(!host.confirm(dialog.clone()).await);
        let host = host.with_assume_yes(true);
        assert!(host.confirm(dialog).await);
        assert_eq!(
            host.take_effects(),
            vec![
                "confirm [Delete script?] Gone -> Cancel".to_string(),
                "confirm [Delete script?] Gone -> Delete".to_string(),
            ]
        );
    }

    #[test]
    fn test_connection_pushes_on_subscribe() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        let connection = SnapshotConnection::new(&snapshot);
        let received = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&received);
        let _sub = connection.subscribe_labels(Box::new(move |labels| {
            *counter.lock() = labels.len();
        }));
        assert_eq!(*received.lock(), 1);
    }
}
