// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! The page ships in two languages, Arabic (default, right-to-left) and
//! English. Per-element copy lives in the markup itself (`data-ar` /
//! `data-en`); the few fixed strings the controller writes on its own, such
//! as the document title, come from embedded Fluent resources.
//!
//! # Features
//!
//! - Normalization of arbitrary language codes onto the supported set
//! - Reading direction per language
//! - Embedded `.ftl` resources formatted with Fluent

pub mod fluent;

pub use fluent::Localizer;

use crate::config::{TEXT_AR_ATTRIBUTE, TEXT_EN_ATTRIBUTE};
use std::fmt;

/// Supported page languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// Document reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// Maps any code onto a supported language. Only the exact code `ar`
    /// selects Arabic; everything else, including unknown codes and other
    /// spellings of `ar`, falls back to English.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == "ar" {
            Language::Ar
        } else {
            Language::En
        }
    }

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    #[must_use]
    pub fn direction(self) -> TextDirection {
        match self {
            Language::Ar => TextDirection::Rtl,
            Language::En => TextDirection::Ltr,
        }
    }

    /// Markup attribute holding an element's text in this language.
    #[must_use]
    pub fn text_attribute(self) -> &'static str {
        match self {
            Language::Ar => TEXT_AR_ATTRIBUTE,
            Language::En => TEXT_EN_ATTRIBUTE,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TextDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}
