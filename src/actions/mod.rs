//! Actions Module
//!
//! Row overflow menu for the script table: which actions exist, their
//! order, labels and icons. Executing them is the picker's job.
//!
//! ## Module Structure
//! - `types`: Core types (RowAction, MenuItem, MenuEntry)
//! - `builders`: Factory for the per-row menu

mod builders;
mod types;

pub use builders::get_row_actions;
pub use types::{MenuEntry, MenuItem, RowAction};
