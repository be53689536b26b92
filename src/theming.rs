// SPDX-License-Identifier: MPL-2.0
//! Theme names.
//!
//! Themes are an open set: the stylesheet decides what a name looks like,
//! and a name it doesn't know simply matches no rule. Nothing here rejects
//! a value.

use crate::config::DEFAULT_THEME;
use std::fmt;

/// Theme identifier written to the root `data-theme` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme(String);

impl Theme {
    pub const DARK: &'static str = "dark";
    pub const LIGHT: &'static str = "light";

    /// Themes the shipped stylesheet defines.
    pub const KNOWN: [&'static str; 2] = [Self::DARK, Self::LIGHT];

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        Self::KNOWN.contains(&self.0.as_str())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_string())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Theme {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Theme {
    fn from(name: String) -> Self {
        Self(name)
    }
}
