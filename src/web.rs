// SPDX-License-Identifier: MPL-2.0
//! Browser binding: the controller over the live DOM and `localStorage`.
//!
//! The page calls [`mount`] once its markup is in place:
//!
//! ```js
//! import init, { mount } from "./d7me_prefs.js";
//! await init();
//! mount();
//! ```

use crate::config::{LANGUAGE_SELECTOR_ID, THEME_SELECTOR_ID};
use crate::document::DocumentAdapter;
use crate::error::{Error, Result};
use crate::i18n::Localizer;
use crate::preferences::PreferenceController;
use crate::storage::PreferenceStore;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlSelectElement, Storage};

const TRANSLATABLE_SELECTOR: &str = "[data-ar], [data-en], .brand-name";

/// [`DocumentAdapter`] over a `web_sys::Document`.
#[derive(Debug, Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn select(&self, id: &str) -> Option<HtmlSelectElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    }
}

impl DocumentAdapter for WebDocument {
    type Element = Element;

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        if let Some(root) = self.document.document_element() {
            if let Err(err) = root.set_attribute(name, value) {
                tracing::warn!(name, ?err, "failed to set root attribute");
            }
        }
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.document.document_element()?.get_attribute(name)
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn translatable_elements(&self) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(TRANSLATABLE_SELECTOR) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn element_has_class(&self, element: &Element, class: &str) -> bool {
        element.matches(&format!(".{class}")).unwrap_or(false)
    }

    fn set_element_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_control_value(&mut self, id: &str, value: &str) {
        if let Some(select) = self.select(id) {
            select.set_value(value);
        }
    }
}

/// [`PreferenceStore`] over `window.localStorage`.
///
/// Storage can be missing entirely (privacy modes, sandboxed iframes); every
/// access then fails with [`Error::Storage`].
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn from_window() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Storage(format!("{:?}", value))
}

type WebController = PreferenceController<WebDocument, LocalStorage>;

/// Restores saved preferences onto the page and wires the settings selectors.
#[wasm_bindgen]
pub fn mount() -> std::result::Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let localizer = Localizer::embedded().map_err(|e| JsValue::from_str(&e.to_string()))?;

    let controller: Rc<RefCell<WebController>> = Rc::new(RefCell::new(PreferenceController::new(
        WebDocument::new(document.clone()),
        LocalStorage::from_window(),
        localizer,
    )));
    controller.borrow_mut().load_persisted_settings();

    let theme = Rc::clone(&controller);
    bind_selector(&document, THEME_SELECTOR_ID, move |value| {
        theme.borrow_mut().set_theme(value);
    })?;

    let language = Rc::clone(&controller);
    bind_selector(&document, LANGUAGE_SELECTOR_ID, move |value| {
        language.borrow_mut().set_language(&value);
    })?;

    Ok(())
}

/// Calls `on_change` with the selected value on every `change` event. A
/// missing selector is skipped.
fn bind_selector<F>(document: &Document, id: &str, on_change: F) -> std::result::Result<(), JsValue>
where
    F: Fn(String) + 'static,
{
    let Some(select) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    else {
        tracing::debug!(id, "selector not found");
        return Ok(());
    };

    let target = select.clone();
    let callback = Closure::<dyn Fn()>::new(move || on_change(target.value()));
    select.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    callback.forget();
    Ok(())
}
