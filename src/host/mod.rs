//! Host services the picker calls into.
//!
//! The picker never executes scripts or draws dialogs itself. Every side
//! effect goes through one of these traits so the component can be driven
//! by a real frontend, the snapshot CLI, or recording fakes in tests.
//!
//! # Architecture
//!
//! - `ScriptBackend` - remote script operations keyed by unique id
//! - `RelatedSearch` - "what is related to X" lookups
//! - `Dialogs` - alert/confirm plus the specialised dialogs
//! - `Navigator`, `Toasts`, `HostEvents` - fire-and-forget UI effects
//! - `HostContext` - which backend components are loaded
//!
//! `Collaborators` bundles one of each. `snapshot` provides an offline
//! implementation of all of them.

mod dialogs;
mod snapshot;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::registry::ScriptConfig;

pub use dialogs::{AlertDialog, AssignCategoryDialog, ConfirmationDialog, NewAutomationMode, Toast};
pub use snapshot::{load_snapshot, Snapshot, SnapshotConnection, SnapshotHost};

/// Remote script operations. Each call may fail with a status code.
#[async_trait]
pub trait ScriptBackend: Send + Sync {
    /// Run the script with the given unique id
    async fn trigger_script(&self, unique_id: &str) -> Result<(), RemoteError>;

    async fn delete_script(&self, unique_id: &str) -> Result<(), RemoteError>;

    /// Configuration as stored in the scripts file
    async fn fetch_script_file_config(&self, unique_id: &str) -> Result<ScriptConfig, RemoteError>;

    /// Configuration derived from the running state (works for scripts that
    /// are not stored in the scripts file)
    async fn get_script_state_config(&self, entity_id: &str) -> Result<ScriptConfig, RemoteError>;
}

/// Related-item search: maps related kind (e.g. "script") to entity ids.
#[async_trait]
pub trait RelatedSearch: Send + Sync {
    async fn find_related(
        &self,
        item_kind: &str,
        item_id: &str,
    ) -> Result<HashMap<String, Vec<String>>, RemoteError>;
}

#[async_trait]
pub trait Dialogs: Send + Sync {
    async fn alert(&self, dialog: AlertDialog);

    /// Resolves to `true` when the user confirmed
    async fn confirm(&self, dialog: ConfirmationDialog) -> bool;

    fn assign_category(&self, dialog: AssignCategoryDialog);

    fn new_automation(&self, mode: NewAutomationMode);

    /// Open the script editor pre-filled with `config`
    fn open_script_editor(&self, config: ScriptConfig);
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

pub trait Toasts: Send + Sync {
    fn show_toast(&self, toast: Toast);
}

pub trait HostEvents: Send + Sync {
    /// Ask the host to show its "more info" view for an entity
    fn show_more_info(&self, entity_id: &str);
}

pub trait HostContext: Send + Sync {
    fn is_component_loaded(&self, component: &str) -> bool;
}

/// One implementation of every host service
#[derive(Clone)]
pub struct Collaborators {
    pub backend: Arc<dyn ScriptBackend>,
    pub search: Arc<dyn RelatedSearch>,
    pub dialogs: Arc<dyn Dialogs>,
    pub navigator: Arc<dyn Navigator>,
    pub toasts: Arc<dyn Toasts>,
    pub events: Arc<dyn HostEvents>,
    pub context: Arc<dyn HostContext>,
}
