//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// Base URL for documentation links (help dialog, empty state)
pub const DEFAULT_DOCUMENTATION_BASE_URL: &str = "https://www.home-assistant.io";

/// Whole days after which "last triggered" switches to an absolute date
pub const DEFAULT_RELATIVE_TIME_CUTOFF_DAYS: i64 = 3;

/// Default layout
pub const DEFAULT_NARROW: bool = false;

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "SCRIPT_PICKER_CONFIG";

/// File name inside `<config dir>/script-picker/`
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Documentation paths
pub const SCRIPTS_DOCS_PATH: &str = "/docs/scripts/";
pub const SCRIPT_EDITOR_DOCS_PATH: &str = "/docs/script/editor/";
