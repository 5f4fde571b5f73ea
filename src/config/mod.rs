//! Configuration module - picker settings
//!
//! This module provides functionality for:
//! - Loading configuration from `<config dir>/script-picker/config.json`
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - `PickerConfig`
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{
    CONFIG_PATH_ENV, DEFAULT_DOCUMENTATION_BASE_URL, DEFAULT_RELATIVE_TIME_CUTOFF_DAYS,
    SCRIPTS_DOCS_PATH, SCRIPT_EDITOR_DOCS_PATH,
};
pub use loader::{config_path, load_config, load_config_from, read_config};
pub use types::PickerConfig;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
