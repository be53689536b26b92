// SPDX-License-Identifier: MPL-2.0
//! `d7me_prefs` drives the theme and language preferences of the D7ME
//! landing page.
//!
//! It keeps the active theme and language, persists them to durable storage,
//! and re-renders the document (root attributes, translated text, title)
//! whenever either changes. The page is reached only through the
//! [`document::DocumentAdapter`] and [`storage::PreferenceStore`] traits, so
//! the same controller runs in the browser (`web` feature) and in tests.

pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod page;
pub mod paths;
pub mod preferences;
pub mod storage;
pub mod theming;
#[cfg(feature = "web")]
pub mod web;

pub use preferences::{PreferenceController, Preferences};
