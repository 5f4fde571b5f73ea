//! Picker module - the script list component
//!
//! `ScriptPicker` owns the inputs pushed by the host (scripts, entity
//! registry, category and label feeds), the filter-pane state and the memo
//! caches, and turns user events into calls on the injected `Collaborators`.
//!
//! # Module Structure
//!
//! - `component` - props, registry feeds, filters and `render`
//! - `handlers` - row actions, row click, create-new, help
//! - `view` - `TableView` and the pieces it is made of

mod component;
mod handlers;
mod view;

pub use component::ScriptPicker;
pub use view::{
    EmptyState, FilterPane, TableRow, TableView, BACK_PATH, EMPTY_STATE_ICON, ROW_ID_FIELD,
};

/// Category scope and related-search kind of scripts
pub(crate) const SCOPE: &str = "script";
/// Related-search kind for script blueprints
pub(crate) const BLUEPRINT_KIND: &str = "script_blueprint";
/// Query parameter carrying a blueprint deep link
pub(crate) const BLUEPRINT_PARAM: &str = "blueprint";

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
