// SPDX-License-Identifier: MPL-2.0
//! Document adapter: the controller's only view of the page.
//!
//! The controller never touches a DOM directly. It queries translatable
//! elements, writes root attributes and text through this trait, so its
//! logic runs unchanged against a browser document (`web` feature) or the
//! in-memory [`MemoryDocument`] used by tests and the CLI.

pub mod memory;

pub use memory::{ElementId, MemoryDocument, MemoryElement};

pub trait DocumentAdapter {
    /// Handle to one element of the document.
    type Element;

    /// Sets an attribute on the document root (`<html>`).
    fn set_root_attribute(&mut self, name: &str, value: &str);

    fn root_attribute(&self, name: &str) -> Option<String>;

    fn set_title(&mut self, title: &str);

    /// Elements carrying `data-ar` or `data-en`, plus brand-name elements,
    /// in document order.
    fn translatable_elements(&self) -> Vec<Self::Element>;

    fn element_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn element_has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Replaces the rendered text of `element`. Attributes are untouched.
    fn set_element_text(&mut self, element: &Self::Element, text: &str);

    /// Sets the current value of a form control; unknown ids are ignored.
    fn set_control_value(&mut self, id: &str, value: &str);
}
