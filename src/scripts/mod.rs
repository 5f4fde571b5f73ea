//! Scripts module - display rows for the script table
//!
//! # Module Structure
//!
//! - `types` - `ScriptItem`, the enriched row
//! - `builder` - deriving rows from scripts and registries
//! - `search` - text search over the filterable columns

mod builder;
mod search;
mod types;

pub use builder::{build_script_items, compute_state_name};
pub use search::{matches_query, search_items};
pub use types::ScriptItem;
