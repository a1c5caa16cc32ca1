//! User settings
//!
//! Loaded from `$CMDHOST_CONFIG` when set, otherwise from the platform
//! config directory (`~/.config/cmdhost/config.toml` on Linux). A missing
//! file means defaults.
//!
//! ```toml
//! log_level = "info"
//! disabled_plugins = ["config"]
//! ```

use std::path::{Path, PathBuf};

use cmdhost_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the settings file location
pub const CONFIG_ENV_VAR: &str = "CMDHOST_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Default tracing filter directive, e.g. `info` or `cmdhost=debug`
    pub log_level: Option<String>,
    /// Plugins whose registration hooks are skipped
    pub disabled_plugins: Vec<String>,
}

/// Path the settings are read from, if one can be determined
pub fn settings_path() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            directories::ProjectDirs::from("", "", "cmdhost")
                .map(|dirs| dirs.config_dir().join("config.toml"))
        })
}

/// Load settings from the default location
pub fn load_settings() -> Result<Settings> {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`; a missing file yields defaults
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    if path.is_dir() {
        return Err(Error::InvalidSettings(format!(
            "settings path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::InvalidSettings(format!("failed to read {}: {e}", path.display()))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::InvalidSettings(format!("failed to parse {}: {e}", path.display()))
    })
}
