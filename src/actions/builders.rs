//! Action builders
//!
//! Factory for the per-row overflow menu.

use crate::i18n::Localize;
use crate::scripts::ScriptItem;

use super::types::{MenuEntry, MenuItem, RowAction};

const PICKER: &str = "ui.panel.config.script.picker";

fn picker_label(localize: &dyn Localize, key: &str) -> String {
    localize.localize(&format!("{}.{}", PICKER, key), &[])
}

/// Overflow menu for one script row.
///
/// Order: info, category, run, traces, divider, duplicate, delete. The
/// category entry reads "Edit category" once a category is assigned.
pub fn get_row_actions(item: &ScriptItem, localize: &dyn Localize) -> Vec<MenuEntry> {
    let category_key = if item.category.is_some() {
        "edit_category"
    } else {
        "assign_category"
    };

    vec![
        MenuEntry::Item(MenuItem::new(
            RowAction::ShowInfo,
            picker_label(localize, "show_info"),
            "mdi:information-outline",
        )),
        MenuEntry::Item(MenuItem::new(
            RowAction::EditCategory,
            picker_label(localize, category_key),
            "mdi:tag",
        )),
        MenuEntry::Item(MenuItem::new(
            RowAction::Run,
            picker_label(localize, "run"),
            "mdi:play",
        )),
        MenuEntry::Item(MenuItem::new(
            RowAction::ShowTrace,
            picker_label(localize, "show_trace"),
            "mdi:transit-connection",
        )),
        MenuEntry::Divider,
        MenuEntry::Item(MenuItem::new(
            RowAction::Duplicate,
            picker_label(localize, "duplicate"),
            "mdi:content-duplicate",
        )),
        MenuEntry::Item(
            MenuItem::new(
                RowAction::Delete,
                picker_label(localize, "delete"),
                "mdi:delete",
            )
            .with_warning(),
        ),
    ]
}
