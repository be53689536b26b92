// SPDX-License-Identifier: MPL-2.0
//! This module handles the on-disk settings file, `settings.toml`, used by
//! [`FileStore`](crate::storage::FileStore) when the controller runs outside
//! a browser.
//!
//! # Configuration Sections
//!
//! - `[preferences]` - raw preference entries, keyed exactly like browser storage
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `D7ME_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use d7me_prefs::config::{self, Config};
//!
//! let path = config::config_path_with_override(None).expect("no config dir");
//! let mut config = config::load_from_path(&path).unwrap_or_default();
//! config.preferences.insert("d7me-theme".into(), "light".into());
//! config::save_to_path(&config, &path).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Settings file contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Preference entries stored verbatim, no escaping or versioning.
    #[serde(default)]
    pub preferences: BTreeMap<String, String>,
}

/// Returns the settings file path inside the resolved config directory.
pub fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads configuration from a specific path.
///
/// A missing file is not an error: it yields the default (empty) config.
pub fn load_from_path(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
