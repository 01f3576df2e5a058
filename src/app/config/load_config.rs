//! Configuration file loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppError, FilenavConfig};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "FILENAV_CONFIG";

/// Where to read configuration from, and whether the file must exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub required: bool,
}

/// Pick the configuration file: explicit flag, then environment, then home.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    home: Option<&Path>,
) -> Option<ConfigLocation> {
    if let Some(path) = explicit {
        return Some(ConfigLocation { path: path.to_path_buf(), required: true });
    }
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(ConfigLocation { path: PathBuf::from(value), required: true });
    }
    home.map(|home| ConfigLocation {
        path: home.join(".config").join("filenav").join("config.toml"),
        required: false,
    })
}

/// Load configuration, falling back to defaults when no file is present.
pub fn load_config(explicit: Option<&Path>) -> Result<FilenavConfig, AppError> {
    let env_value = std::env::var(CONFIG_ENV).ok();
    let home = std::env::var_os("HOME").map(PathBuf::from);

    let Some(location) = resolve_config_path(explicit, env_value.as_deref(), home.as_deref())
    else {
        log::debug!("no config location available, using defaults");
        return Ok(FilenavConfig::default());
    };

    if !location.path.is_file() {
        if location.required {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                location.path.display()
            )));
        }
        log::debug!("no config at {}, using defaults", location.path.display());
        return Ok(FilenavConfig::default());
    }

    log::debug!("loading config from {}", location.path.display());
    let content = fs::read_to_string(&location.path)?;
    parse_config_content(&content)
}
