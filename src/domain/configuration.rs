//! User configuration model (`config.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilenavConfig {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub confirm: ConfirmConfig,
    #[serde(default)]
    pub open: OpenConfig,
}

impl FilenavConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.open.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrowserConfig {
    /// Directory shown at startup; the working directory when unset.
    #[serde(default)]
    pub start_dir: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub show_hidden: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { start_dir: None, show_hidden: true }
    }
}

/// Which destructive actions ask before proceeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfirmConfig {
    #[serde(default = "default_true")]
    pub overwrite: bool,
    #[serde(default = "default_true")]
    pub delete: bool,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self { overwrite: true, delete: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenConfig {
    /// Program used to open files; platform default when unset.
    #[serde(default)]
    pub command: Option<String>,
}

impl OpenConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(command) = &self.command
            && command.trim().is_empty()
        {
            return Err(AppError::InvalidConfig("open.command must not be blank".to_string()));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<FilenavConfig, AppError> {
    let config: FilenavConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
