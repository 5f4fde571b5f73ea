//! Filters module - filter panes and their intersection
//!
//! - `types` - `FilterSource`, `FilterValue`, `FilterState`, `FilteredScripts`
//! - `engine` - folding the panes into one filtered result

mod engine;
mod types;

pub use engine::{apply_filters, scripts_in_category, scripts_with_any_label};
pub use types::{FilterSource, FilterState, FilterValue, FilteredScripts};
