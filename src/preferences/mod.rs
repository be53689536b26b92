// SPDX-License-Identifier: MPL-2.0
//! Theme and language preferences: state, persistence and rendering.
//!
//! [`PreferenceController`] owns the single [`Preferences`] value for the
//! page session. It is created with compiled-in defaults, overwritten once
//! by [`load_persisted_settings`](PreferenceController::load_persisted_settings)
//! at startup, and changed afterwards only through
//! [`set_theme`](PreferenceController::set_theme) and
//! [`set_language`](PreferenceController::set_language).
//!
//! Every operation runs to completion synchronously; there is no in-flight
//! state for an observer to see.

pub mod controller;
pub mod state;

pub use controller::PreferenceController;
pub use state::Preferences;
