//! Row actions and navigation
//!
//! Remote failures stop here: they are logged and turned into alert
//! dialogs, never returned to the caller.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::actions::RowAction;
use crate::config::SCRIPTS_DOCS_PATH;
use crate::error::RemoteError;
use crate::host::{
    AlertDialog, AssignCategoryDialog, ConfirmationDialog, NewAutomationMode, Toast,
};
use crate::registry::{find_entry, EntityRegistryEntry};
use crate::scripts::ScriptItem;

use super::component::{ScriptPicker, EDITOR};
use super::SCOPE;

const BLUEPRINT_COMPONENT: &str = "blueprint";

impl ScriptPicker {
    fn registry_entry(&self, entity_id: &str) -> Option<&EntityRegistryEntry> {
        find_entry(&self.entity_registry, entity_id)
    }

    fn editor_text(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.localize
            .localize(&format!("{}.{}", EDITOR, key), args)
    }

    fn load_error_text(&self, err: &RemoteError) -> String {
        let code = err.code_for_display();
        self.editor_text("load_error_unknown", &[("err_no", &code)])
    }

    /// Run one overflow-menu action on a row
    pub async fn dispatch(&self, action: RowAction, item: &ScriptItem) {
        match action {
            RowAction::ShowInfo => self.show_info(item),
            RowAction::EditCategory => self.edit_category(item).await,
            RowAction::Run => self.run_script(item).await,
            RowAction::ShowTrace => self.show_trace(item),
            RowAction::Duplicate => self.duplicate(item).await,
            RowAction::Delete => self.delete_confirm(item).await,
        }
    }

    /// Ask the host to show its more-info view for the script
    pub fn show_info(&self, item: &ScriptItem) {
        info!(
            event_type = "picker_action",
            action = "show_info",
            entity_id = item.entity_id(),
            "Showing script info"
        );
        self.collaborators.events.show_more_info(item.entity_id());
    }

    /// Trigger the script and confirm with a toast. Scripts without a
    /// registry entry cannot be addressed and are skipped.
    pub async fn run_script(&self, item: &ScriptItem) {
        let Some(entry) = self.registry_entry(item.entity_id()) else {
            debug!(entity_id = item.entity_id(), "Run skipped, no registry entry");
            return;
        };
        let unique_id = entry.unique_id.clone();
        let backend = Arc::clone(&self.collaborators.backend);

        match backend.trigger_script(&unique_id).await {
            Ok(()) => {
                info!(
                    event_type = "picker_action",
                    action = "run",
                    entity_id = item.entity_id(),
                    unique_id = %unique_id,
                    "Script triggered"
                );
                let message = self
                    .localize
                    .localize("ui.notification_toast.triggered", &[("name", &item.name)]);
                self.collaborators.toasts.show_toast(Toast::new(message));
            }
            Err(err) => {
                warn!(
                    event_type = "picker_action",
                    action = "run",
                    unique_id = %unique_id,
                    error = %err,
                    "Failed to trigger script"
                );
                let text = self.load_error_text(&err);
                self.collaborators.dialogs.alert(AlertDialog::text(text)).await;
            }
        }
    }

    /// Navigate to the trace view of the script
    pub fn show_trace(&self, item: &ScriptItem) {
        let Some(entry) = self.registry_entry(item.entity_id()) else {
            debug!(entity_id = item.entity_id(), "Trace skipped, no registry entry");
            return;
        };
        info!(
            event_type = "picker_action",
            action = "show_trace",
            unique_id = %entry.unique_id,
            "Opening traces"
        );
        self.collaborators
            .navigator
            .navigate(&format!("/config/script/trace/{}", entry.unique_id));
    }

    /// Open the category dialog. Without a registry entry the script cannot
    /// carry a category, which the user is told in an alert.
    pub async fn edit_category(&self, item: &ScriptItem) {
        let Some(entry) = self.registry_entry(item.entity_id()) else {
            info!(
                event_type = "picker_action",
                action = "edit_category",
                entity_id = item.entity_id(),
                supported = false,
                "Category not supported"
            );
            let dialog = AlertDialog::text(self.picker_text("no_category_entity_reg"))
                .with_title(self.picker_text("no_category_support"));
            self.collaborators.dialogs.alert(dialog).await;
            return;
        };
        info!(
            event_type = "picker_action",
            action = "edit_category",
            entity_id = item.entity_id(),
            supported = true,
            "Opening category dialog"
        );
        self.collaborators.dialogs.assign_category(AssignCategoryDialog {
            scope: SCOPE.to_string(),
            entry: entry.clone(),
        });
    }

    /// Open the editor pre-filled with a copy of the script.
    ///
    /// Scripts that are not stored in the scripts file (404 on the file
    /// config) are copied from their state-derived config instead, without
    /// the duplicate marker. Any other failure ends in an alert.
    pub async fn duplicate(&self, item: &ScriptItem) {
        let Some(entry) = self.registry_entry(item.entity_id()) else {
            debug!(entity_id = item.entity_id(), "Duplicate skipped, no registry entry");
            return;
        };
        let unique_id = entry.unique_id.clone();
        let backend = Arc::clone(&self.collaborators.backend);

        let err = match backend.fetch_script_file_config(&unique_id).await {
            Ok(mut config) => {
                let alias = config.alias.take().unwrap_or_else(|| item.name.clone());
                config.alias = Some(format!("{} ({})", alias, self.picker_text("duplicate")));
                info!(
                    event_type = "picker_action",
                    action = "duplicate",
                    unique_id = %unique_id,
                    source = "file",
                    "Opening editor with duplicate"
                );
                self.collaborators.dialogs.open_script_editor(config);
                return;
            }
            Err(err) => err,
        };

        let err = if err.is_not_found() {
            match backend.get_script_state_config(item.entity_id()).await {
                Ok(config) => {
                    info!(
                        event_type = "picker_action",
                        action = "duplicate",
                        entity_id = item.entity_id(),
                        source = "state",
                        "Opening editor with state config"
                    );
                    self.collaborators.dialogs.open_script_editor(config);
                    return;
                }
                Err(fallback_err) => fallback_err,
            }
        } else {
            err
        };

        warn!(
            event_type = "picker_action",
            action = "duplicate",
            entity_id = item.entity_id(),
            error = %err,
            "Failed to load script for duplication"
        );
        let text = self.load_error_text(&err);
        self.collaborators.dialogs.alert(AlertDialog::text(text)).await;
    }

    /// Ask for confirmation, then delete
    pub async fn delete_confirm(&self, item: &ScriptItem) {
        let dialog = ConfirmationDialog {
            title: self.editor_text("delete_confirm_title", &[]),
            text: self.editor_text("delete_confirm_text", &[("name", &item.name)]),
            confirm_text: self.text("ui.common.delete"),
            dismiss_text: self.text("ui.common.cancel"),
            destructive: true,
        };
        let dialogs = Arc::clone(&self.collaborators.dialogs);
        if dialogs.confirm(dialog).await {
            self.delete(item).await;
        } else {
            debug!(entity_id = item.entity_id(), "Delete dismissed");
        }
    }

    /// Delete the script. 400 means the script lives outside the scripts
    /// file and cannot be deleted from here.
    pub async fn delete(&self, item: &ScriptItem) {
        let Some(entry) = self.registry_entry(item.entity_id()) else {
            debug!(entity_id = item.entity_id(), "Delete skipped, no registry entry");
            return;
        };
        let unique_id = entry.unique_id.clone();
        let backend = Arc::clone(&self.collaborators.backend);

        match backend.delete_script(&unique_id).await {
            Ok(()) => {
                info!(
                    event_type = "picker_action",
                    action = "delete",
                    unique_id = %unique_id,
                    "Script deleted"
                );
            }
            Err(err) => {
                warn!(
                    event_type = "picker_action",
                    action = "delete",
                    unique_id = %unique_id,
                    error = %err,
                    "Failed to delete script"
                );
                let text = if err.is_bad_request() {
                    self.editor_text("load_error_not_deletable", &[])
                } else {
                    self.load_error_text(&err)
                };
                self.collaborators.dialogs.alert(AlertDialog::text(text)).await;
            }
        }
    }

    /// Open the editor for a clicked row, or the read-only view when the
    /// script has no registry entry.
    pub fn row_clicked(&self, entity_id: &str) {
        let path = match self.registry_entry(entity_id) {
            Some(entry) => format!("/config/script/edit/{}", entry.unique_id),
            None => format!("/config/script/show/{}", entity_id),
        };
        info!(
            event_type = "picker_action",
            action = "row_click",
            entity_id = entity_id,
            path = %path,
            "Row clicked"
        );
        self.collaborators.navigator.navigate(&path);
    }

    /// "Add script": offer blueprints when that backend component is
    /// loaded, else go straight to a blank editor.
    pub fn create_new(&self) {
        let blueprints = self
            .collaborators
            .context
            .is_component_loaded(BLUEPRINT_COMPONENT);
        info!(
            event_type = "picker_action",
            action = "create_new",
            blueprints = blueprints,
            "Creating script"
        );
        if blueprints {
            self.collaborators
                .dialogs
                .new_automation(NewAutomationMode::Script);
        } else {
            self.collaborators.navigator.navigate("/config/script/edit/new");
        }
    }

    /// Introduction to scripts with a link to the documentation
    pub async fn show_help(&self) {
        let dialog = AlertDialog::text(self.picker_text("introduction"))
            .with_title(self.text("ui.panel.config.script.caption"))
            .with_link(
                self.picker_text("learn_more"),
                self.config.documentation_url(SCRIPTS_DOCS_PATH),
            );
        self.collaborators.dialogs.alert(dialog).await;
    }
}
