// SPDX-License-Identifier: MPL-2.0
//! The landing page's translatable markup, as served in `index.html`.

use crate::config::{
    BRAND_NAME_CLASS, DEFAULT_LANGUAGE, DEFAULT_THEME, LANGUAGE_SELECTOR_ID, THEME_SELECTOR_ID,
};
use crate::document::{MemoryDocument, MemoryElement};

/// Builds a [`MemoryDocument`] mirroring the page as first served: Arabic
/// copy rendered, settings controls on their default values.
pub fn landing_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();

    doc.push(MemoryElement::new("© دحمي").with_class(BRAND_NAME_CLASS));
    doc.push(
        MemoryElement::bilingual("سيرفر دحمي الرسمي", "D7ME Official Server")
            .with_class("main-title"),
    );
    doc.push(
        MemoryElement::bilingual(
            "تنبيه: السيرفر مخصص للأعضاء فقط",
            "Notice: the server is for members only",
        )
        .with_class("warning-text"),
    );
    doc.push(
        MemoryElement::bilingual("انضم إلى ديسكورد", "Join Discord").with_class("discord-btn"),
    );
    doc.push(MemoryElement::bilingual("الإعدادات", "Settings").with_class("page-title"));
    doc.push(MemoryElement::bilingual("السمة", "Theme"));
    doc.push(MemoryElement::bilingual("اللغة", "Language"));
    doc.push(
        MemoryElement::bilingual("جميع الحقوق محفوظة", "All rights reserved")
            .with_class("footer"),
    );

    doc.add_control(THEME_SELECTOR_ID, DEFAULT_THEME);
    doc.add_control(LANGUAGE_SELECTOR_ID, DEFAULT_LANGUAGE);
    doc
}
