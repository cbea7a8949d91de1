pub mod types;

use crate::error::{ReconKitError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".reconkit.toml";

/// Get the global config file path (~/.reconkit.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load configuration.
///
/// An explicitly named file must exist and parse. Without one, the
/// working directory is checked first, then the home directory; a file
/// that is missing or does not parse falls back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)?;
        return toml::from_str(&content).map_err(|e| ReconKitError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        });
    }

    // Local config first
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        if let Ok(content) = fs::read_to_string(&local) {
            if let Ok(config) = toml::from_str(&content) {
                return Ok(config);
            }
        }
    }

    // Then global config
    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Ok(content) = fs::read_to_string(&global) {
                if let Ok(config) = toml::from_str(&content) {
                    return Ok(config);
                }
            }
        }
    }

    Ok(types::Config::default())
}
