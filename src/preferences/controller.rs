// SPDX-License-Identifier: MPL-2.0
use super::Preferences;
use crate::config::{
    BRAND_NAME_CLASS, DIR_ATTRIBUTE, LANGUAGE_SELECTOR_ID, LANGUAGE_STORAGE_KEY, LANG_ATTRIBUTE,
    THEME_ATTRIBUTE, THEME_SELECTOR_ID, THEME_STORAGE_KEY,
};
use crate::document::DocumentAdapter;
use crate::i18n::{Language, Localizer};
use crate::storage::PreferenceStore;
use crate::theming::Theme;

/// Keeps the document and durable storage in sync with [`Preferences`].
///
/// Storage failures never surface: reads fall back to the current value and
/// writes are dropped, both with a warning in the log.
#[derive(Debug)]
pub struct PreferenceController<D, S> {
    state: Preferences,
    document: D,
    store: S,
    localizer: Localizer,
}

impl<D, S> PreferenceController<D, S>
where
    D: DocumentAdapter,
    S: PreferenceStore,
{
    /// Creates a controller holding the compiled-in defaults. Nothing is
    /// rendered until [`load_persisted_settings`](Self::load_persisted_settings).
    pub fn new(document: D, store: S, localizer: Localizer) -> Self {
        Self {
            state: Preferences::default(),
            document,
            store,
            localizer,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.state.theme
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (D, S) {
        (self.document, self.store)
    }

    /// Switches the theme. Any name is accepted; one the stylesheet doesn't
    /// know just matches no rule.
    pub fn set_theme(&mut self, name: impl Into<Theme>) {
        let theme = name.into();
        if !theme.is_known() {
            tracing::debug!(theme = %theme, "theme has no stylesheet rules");
        }
        self.state.theme = theme;
        self.render_theme();
        self.persist(THEME_STORAGE_KEY, self.state.theme.as_str().to_owned());
        tracing::debug!(theme = %self.state.theme, "theme changed");
    }

    /// Switches the language. Codes other than `ar` select English, and the
    /// normalized code is what gets persisted.
    pub fn set_language(&mut self, code: &str) {
        self.state.language = Language::from_code(code);
        self.render_language();
        self.persist(LANGUAGE_STORAGE_KEY, self.state.language.code().to_owned());
        tracing::debug!(requested = code, language = %self.state.language, "language changed");
    }

    /// Re-renders every translatable element for the current language and
    /// updates the document title.
    ///
    /// Elements without text for the current language keep what they show.
    /// Brand-name elements always get the localized brand string.
    pub fn apply_translations(&mut self) {
        let language = self.state.language;
        let attribute = language.text_attribute();
        let brand = self.localizer.tr(language, "brand-name");

        let elements = self.document.translatable_elements();
        let count = elements.len();
        for element in &elements {
            if let Some(text) = self
                .document
                .element_attribute(element, attribute)
                .filter(|t| !t.is_empty())
            {
                self.document.set_element_text(element, &text);
            }
            if self.document.element_has_class(element, BRAND_NAME_CLASS) {
                self.document.set_element_text(element, &brand);
            }
        }

        let title = self.localizer.tr(language, "document-title");
        self.document.set_title(&title);
        tracing::debug!(language = %language, elements = count, "translations applied");
    }

    /// Startup pass: adopts persisted values over the defaults and renders
    /// the resulting state, including the settings controls. Storage is only
    /// read here, never written.
    pub fn load_persisted_settings(&mut self) {
        if let Some(theme) = self.read_persisted(THEME_STORAGE_KEY) {
            self.state.theme = Theme::new(theme);
        }
        if let Some(code) = self.read_persisted(LANGUAGE_STORAGE_KEY) {
            self.state.language = Language::from_code(&code);
        }

        self.render_theme();
        self.render_language();
        self.document
            .set_control_value(THEME_SELECTOR_ID, self.state.theme.as_str());
        self.document
            .set_control_value(LANGUAGE_SELECTOR_ID, self.state.language.code());

        tracing::debug!(
            theme = %self.state.theme,
            language = %self.state.language,
            "settings loaded"
        );
    }

    fn render_theme(&mut self) {
        self.document
            .set_root_attribute(THEME_ATTRIBUTE, self.state.theme.as_str());
    }

    fn render_language(&mut self) {
        let language = self.state.language;
        self.document
            .set_root_attribute(DIR_ATTRIBUTE, language.direction().as_str());
        self.document.set_root_attribute(LANG_ATTRIBUTE, language.code());
        self.apply_translations();
    }

    fn read_persisted(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(error) => {
                tracing::warn!(key, %error, "failed to read preference, keeping current value");
                None
            }
        }
    }

    fn persist(&mut self, key: &str, value: String) {
        if let Err(error) = self.store.set(key, &value) {
            tracing::warn!(key, %error, "failed to persist preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{MemoryDocument, MemoryElement};
    use crate::storage::MemoryStore;

    fn controller(
        doc: MemoryDocument,
        store: MemoryStore,
    ) -> PreferenceController<MemoryDocument, MemoryStore> {
        let localizer = Localizer::embedded().expect("embedded resources should parse");
        PreferenceController::new(doc, store, localizer)
    }

    #[test]
    fn new_controller_renders_nothing_until_loaded() {
        let ctrl = controller(MemoryDocument::new(), MemoryStore::new());
        assert!(ctrl.document().root_attributes().is_empty());
        assert_eq!(ctrl.preferences(), &Preferences::default());
    }

    #[test]
    fn set_theme_writes_attribute_and_storage() {
        let mut ctrl = controller(MemoryDocument::new(), MemoryStore::new());
        ctrl.set_theme("light");

        assert_eq!(ctrl.theme().as_str(), "light");
        assert_eq!(ctrl.document().root_attribute("data-theme"), Some("light".into()));
        assert_eq!(ctrl.store().entry("d7me-theme"), Some("light"));
    }

    #[test]
    fn set_theme_accepts_unknown_names() {
        let mut ctrl = controller(MemoryDocument::new(), MemoryStore::new());
        ctrl.set_theme("neon");

        assert_eq!(ctrl.document().root_attribute("data-theme"), Some("neon".into()));
        assert_eq!(ctrl.store().entry("d7me-theme"), Some("neon"));
    }

    #[test]
    fn brand_name_follows_language() {
        let mut doc = MemoryDocument::new();
        let brand = doc.push(
            MemoryElement::new("© دحمي")
                .with_class("brand-name")
                .with_attribute("data-en", "ignored"),
        );
        let mut ctrl = controller(doc, MemoryStore::new());

        ctrl.set_language("en");
        assert_eq!(ctrl.document().text(brand), "© D7ME");

        ctrl.set_language("ar");
        assert_eq!(ctrl.document().text(brand), "© دحمي");
    }

    #[test]
    fn title_tracks_language() {
        let mut ctrl = controller(MemoryDocument::new(), MemoryStore::new());
        ctrl.set_language("en");
        assert_eq!(ctrl.document().title(), "D7ME - Official Server");
        ctrl.set_language("ar");
        assert_eq!(ctrl.document().title(), "D7ME - سيرفر دحمي الرسمي");
    }

    #[test]
    fn empty_translation_keeps_current_text() {
        let mut doc = MemoryDocument::new();
        let id = doc.push(
            MemoryElement::new("قبل")
                .with_attribute("data-ar", "قبل")
                .with_attribute("data-en", ""),
        );
        let mut ctrl = controller(doc, MemoryStore::new());

        ctrl.set_language("en");
        assert_eq!(ctrl.document().text(id), "قبل");
    }

    #[test]
    fn unavailable_storage_on_write_still_updates_page() {
        let mut store = MemoryStore::new();
        store.set_unavailable(true);
        let mut ctrl = controller(MemoryDocument::new(), store);

        ctrl.set_language("en");
        ctrl.set_theme("light");

        assert_eq!(ctrl.language(), Language::En);
        assert_eq!(ctrl.theme().as_str(), "light");
        assert_eq!(ctrl.document().root_attribute("dir"), Some("ltr".into()));
        assert_eq!(ctrl.store().entry("d7me-language"), None);
    }

    #[test]
    fn unavailable_storage_on_load_keeps_defaults() {
        let mut store =
            MemoryStore::with_entries([("d7me-theme", "light"), ("d7me-language", "en")]);
        store.set_unavailable(true);
        let mut ctrl = controller(MemoryDocument::new(), store);

        ctrl.load_persisted_settings();

        assert_eq!(ctrl.preferences(), &Preferences::default());
        assert_eq!(ctrl.document().root_attribute("dir"), Some("rtl".into()));
        assert_eq!(ctrl.document().root_attribute("data-theme"), Some("dark".into()));
    }

    #[test]
    fn empty_persisted_values_are_ignored() {
        let store = MemoryStore::with_entries([("d7me-theme", ""), ("d7me-language", "")]);
        let mut ctrl = controller(MemoryDocument::new(), store);

        ctrl.load_persisted_settings();

        assert_eq!(ctrl.preferences(), &Preferences::default());
    }

    #[test]
    fn load_syncs_selector_controls() {
        let mut doc = MemoryDocument::new();
        doc.add_control("theme-selector", "dark");
        doc.add_control("language-selector", "ar");
        let store = MemoryStore::with_entries([("d7me-theme", "light"), ("d7me-language", "en")]);
        let mut ctrl = controller(doc, store);

        ctrl.load_persisted_settings();

        assert_eq!(ctrl.document().control_value("theme-selector"), Some("light"));
        assert_eq!(ctrl.document().control_value("language-selector"), Some("en"));
    }

    #[test]
    fn load_does_not_write_storage() {
        let store = MemoryStore::with_entries([("d7me-language", "fr")]);
        let mut ctrl = controller(MemoryDocument::new(), store);

        ctrl.load_persisted_settings();

        assert_eq!(ctrl.language(), Language::En);
        assert_eq!(ctrl.store().entry("d7me-language"), Some("fr"));
        assert_eq!(ctrl.store().entry("d7me-theme"), None);
    }
}
