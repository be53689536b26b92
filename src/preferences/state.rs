// SPDX-License-Identifier: MPL-2.0
use crate::i18n::Language;
use crate::theming::Theme;

/// The active theme and language. Exactly one of each at any time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}
