// SPDX-License-Identifier: MPL-2.0
//! Store backed by the `[preferences]` table of `settings.toml`.

use super::PreferenceStore;
use crate::config;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Reads and rewrites the settings file on every access, so separate
/// processes sharing the file see each other's writes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located in the resolved config directory.
    pub fn with_override(base_dir: Option<PathBuf>) -> Result<Self> {
        config::config_path_with_override(base_dir)
            .map(Self::new)
            .ok_or_else(|| Error::Config("no config directory available".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let config = config::load_from_path(&self.path)?;
        Ok(config.preferences.get(key).cloned())
    }

    /// A settings file that no longer parses is replaced rather than
    /// blocking every later write.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut config = match config::load_from_path(&self.path) {
            Ok(config) => config,
            Err(Error::Config(error)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %error,
                    "settings file is corrupt, rewriting it"
                );
                config::Config::default()
            }
            Err(error) => return Err(error),
        };
        config
            .preferences
            .insert(key.to_string(), value.to_string());
        config::save_to_path(&config, &self.path)
    }
}
