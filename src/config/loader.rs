//! Configuration loading from file system

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use super::defaults::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use super::types::PickerConfig;
use crate::error::PickerError;

/// Config file location: `$SCRIPT_PICKER_CONFIG`, else
/// `<config dir>/script-picker/config.json`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("script-picker")
        .join(CONFIG_FILE_NAME)
}

/// Read and parse one config file
pub fn read_config(path: &Path) -> Result<PickerConfig, PickerError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PickerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents)
        .map_err(|e| PickerError::Config(format!("{}: {}", path.display(), e)))
}

/// Load configuration from `path`.
///
/// Returns `PickerConfig::default()` if the file is missing or invalid.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn load_config_from(path: &Path) -> PickerConfig {
    if !path.exists() {
        info!("Config file not found, using defaults");
        return PickerConfig::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!("Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            PickerConfig::default()
        }
    }
}

/// Load configuration from the default location
pub fn load_config() -> PickerConfig {
    load_config_from(&config_path())
}
