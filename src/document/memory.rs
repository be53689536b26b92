// SPDX-License-Identifier: MPL-2.0
//! In-memory document.

use super::DocumentAdapter;
use crate::config::{BRAND_NAME_CLASS, TEXT_AR_ATTRIBUTE, TEXT_EN_ATTRIBUTE};
use std::collections::BTreeMap;

/// Index of an element inside a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    pub attributes: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub text: String,
}

impl MemoryElement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Element with both language texts, showing the Arabic one.
    pub fn bilingual(ar: &str, en: &str) -> Self {
        Self::new(ar)
            .with_attribute(TEXT_AR_ATTRIBUTE, ar)
            .with_attribute(TEXT_EN_ATTRIBUTE, en)
    }

    fn is_translatable(&self) -> bool {
        self.attributes.contains_key(TEXT_AR_ATTRIBUTE)
            || self.attributes.contains_key(TEXT_EN_ATTRIBUTE)
            || self.classes.iter().any(|c| c == BRAND_NAME_CLASS)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    root_attributes: BTreeMap<String, String>,
    title: String,
    elements: Vec<MemoryElement>,
    controls: BTreeMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: MemoryElement) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Registers a form control so [`control_value`](Self::control_value) can
    /// report it.
    pub fn add_control(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.controls.insert(id.into(), value.into());
    }

    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(id.0)
    }

    /// Rendered text of an element, empty for an unknown id.
    pub fn text(&self, id: ElementId) -> &str {
        self.element(id).map_or("", |e| e.text.as_str())
    }

    pub fn elements(&self) -> &[MemoryElement] {
        &self.elements
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn root_attributes(&self) -> &BTreeMap<String, String> {
        &self.root_attributes
    }

    pub fn control_value(&self, id: &str) -> Option<&str> {
        self.controls.get(id).map(String::as_str)
    }
}

impl DocumentAdapter for MemoryDocument {
    type Element = ElementId;

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root_attributes
            .insert(name.to_string(), value.to_string());
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.get(name).cloned()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn translatable_elements(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_translatable())
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn element_attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.element(*element)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    fn element_has_class(&self, element: &ElementId, class: &str) -> bool {
        self.element(*element)
            .is_some_and(|e| e.classes.iter().any(|c| c == class))
    }

    fn set_element_text(&mut self, element: &ElementId, text: &str) {
        if let Some(e) = self.elements.get_mut(element.0) {
            e.text = text.to_string();
        }
    }

    fn set_control_value(&mut self, id: &str, value: &str) {
        if let Some(current) = self.controls.get_mut(id) {
            *current = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_annotated_elements_are_translatable() {
        let mut doc = MemoryDocument::new();
        let plain = doc.push(MemoryElement::new("static"));
        let ar_only = doc.push(MemoryElement::new("x").with_attribute("data-ar", "س"));
        let brand = doc.push(MemoryElement::new("© D7ME").with_class("brand-name"));

        let found = doc.translatable_elements();
        assert_eq!(found, vec![ar_only, brand]);
        assert!(!found.contains(&plain));
    }

    #[test]
    fn set_element_text_keeps_attributes() {
        let mut doc = MemoryDocument::new();
        let id = doc.push(MemoryElement::bilingual("مرحبا", "Hello"));

        doc.set_element_text(&id, "Hello");

        let element = doc.element(id).unwrap();
        assert_eq!(element.text, "Hello");
        assert_eq!(element.attributes.get("data-ar").map(String::as_str), Some("مرحبا"));
        assert_eq!(element.attributes.get("data-en").map(String::as_str), Some("Hello"));
    }

    #[test]
    fn unknown_control_is_ignored() {
        let mut doc = MemoryDocument::new();
        doc.set_control_value("missing", "x");
        assert_eq!(doc.control_value("missing"), None);

        doc.add_control("theme-selector", "dark");
        doc.set_control_value("theme-selector", "light");
        assert_eq!(doc.control_value("theme-selector"), Some("light"));
    }

    #[test]
    fn root_attributes_round_trip() {
        let mut doc = MemoryDocument::new();
        doc.set_root_attribute("dir", "rtl");
        assert_eq!(doc.root_attribute("dir"), Some("rtl".to_string()));
        assert_eq!(doc.root_attribute("lang"), None);
    }
}
