// SPDX-License-Identifier: MPL-2.0
use super::Language;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Formats the controller's fixed strings (document title, brand name).
pub struct Localizer {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for Localizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localizer")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Localizer {
    /// Builds bundles from the `.ftl` files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut bundles = HashMap::new();
        for language in Language::ALL {
            let filename = format!("{}.ftl", language.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Translation(format!("missing resource {filename}")))?;
            let source = String::from_utf8_lossy(file.data.as_ref()).to_string();
            bundles.insert(language, build_bundle(language, source)?);
        }
        Ok(Self { bundles })
    }

    /// Builds a localizer from explicit FTL sources, one per language.
    pub fn from_sources(ar: &str, en: &str) -> Result<Self> {
        let mut bundles = HashMap::new();
        bundles.insert(Language::Ar, build_bundle(Language::Ar, ar.to_string())?);
        bundles.insert(Language::En, build_bundle(Language::En, en.to_string())?);
        Ok(Self { bundles })
    }

    pub fn tr(&self, language: Language, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&language) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn build_bundle(language: Language, source: String) -> Result<FluentBundle<FluentResource>> {
    let locale: LanguageIdentifier = language
        .code()
        .parse()
        .map_err(|err| Error::Translation(format!("{}: {:?}", language, err)))?;
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::Translation(format!("{}.ftl: {:?}", language, errors)))?;

    let mut bundle = FluentBundle::new(vec![locale]);
    // Titles are plain text; bidi isolation marks would leak into them.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::Translation(format!("{}.ftl: {:?}", language, errors)))?;
    Ok(bundle)
}
