// SPDX-License-Identifier: MPL-2.0
//! Durable key/value storage for preferences.
//!
//! The store holds raw strings. Keys are fixed (see
//! [`THEME_STORAGE_KEY`](crate::config::THEME_STORAGE_KEY) and
//! [`LANGUAGE_STORAGE_KEY`](crate::config::LANGUAGE_STORAGE_KEY)) and values
//! are written verbatim. Accesses are read-then-write with no transaction:
//! the last writer wins.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;

/// Backend for persisted preferences (browser storage, a settings file, ...).
pub trait PreferenceStore {
    /// Reads the value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
