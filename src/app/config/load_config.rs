//! User configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::parse_config_content;
use crate::domain::{AppConfig, AppError};

/// Directory under `$HOME` holding the user configuration.
pub const CONFIG_DIR: &str = ".veo-prompt";
pub const CONFIG_FILE: &str = "config.toml";

/// Default configuration path, `$HOME/.veo-prompt/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the default path is read when
/// present and defaults are used otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path().filter(|path| path.exists()) {
            Some(path) => path,
            None => return Ok(AppConfig::default()),
        },
    };

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content).map_err(|err| {
        AppError::config_error(format!("Invalid config {}: {}", path.display(), err))
    })
}
