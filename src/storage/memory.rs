// SPDX-License-Identifier: MPL-2.0
//! In-process store, lost when the process ends.

use super::PreferenceStore;
use crate::error::{Error, Result};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store, as if a previous session had written `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            unavailable: false,
        }
    }

    /// Makes every read and write fail, like storage disabled by the browser.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Direct view of what has been stored, bypassing availability.
    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            Err(Error::Storage("storage unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_available()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
