// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and fixed identifiers.
//!
//! # Categories
//!
//! - **Preferences**: compiled-in theme and language
//! - **Storage keys**: entries written to durable storage
//! - **Markup**: attribute names, classes and control ids the page uses

// ==========================================================================
// Preference Defaults
// ==========================================================================

/// Theme active when nothing has been persisted yet.
pub const DEFAULT_THEME: &str = "dark";

/// Language code active when nothing has been persisted yet.
pub const DEFAULT_LANGUAGE: &str = "ar";

// ==========================================================================
// Storage Keys
// ==========================================================================

/// Durable storage key holding the theme name.
pub const THEME_STORAGE_KEY: &str = "d7me-theme";

/// Durable storage key holding the language code.
pub const LANGUAGE_STORAGE_KEY: &str = "d7me-language";

// ==========================================================================
// Markup
// ==========================================================================

/// Root attribute carrying the theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root attribute carrying the reading direction.
pub const DIR_ATTRIBUTE: &str = "dir";

/// Root attribute carrying the language tag.
pub const LANG_ATTRIBUTE: &str = "lang";

/// Per-element Arabic text.
pub const TEXT_AR_ATTRIBUTE: &str = "data-ar";

/// Per-element English text.
pub const TEXT_EN_ATTRIBUTE: &str = "data-en";

/// Elements with this class always show the localized brand name.
pub const BRAND_NAME_CLASS: &str = "brand-name";

/// Id of the theme `<select>` in the settings page.
pub const THEME_SELECTOR_ID: &str = "theme-selector";

/// Id of the language `<select>` in the settings page.
pub const LANGUAGE_SELECTOR_ID: &str = "language-selector";
