//! Script Picker - management view-model for user-defined automation scripts
//!
//! This library binds remote registry data (scripts, categories, labels,
//! entity registry) to a table schema, derives display-ready rows, runs the
//! filter-pane intersection logic and forwards row actions to injected host
//! services (backend, dialogs, navigation, toasts).

rust_i18n::i18n!("locales", fallback = "en");

pub mod actions;
pub mod columns;
pub mod config;
pub mod error;
pub mod filters;
pub mod host;
pub mod i18n;
pub mod logging;
pub mod memo;
pub mod picker;
pub mod registry;
pub mod scripts;

pub use picker::{ScriptPicker, TableView};
