//! Country records and their per-language display projection.

use crate::error::{Error, Result};
use crate::i18n::{
    format_count_for_language, format_number_for_language, Language, LanguageRegistry,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One country or dependency, as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    /// ISO 3166-1 alpha-2 code (e.g., "CA")
    pub code: String,
    pub continent: String,
    pub area_in_km2: f64,
    pub population: u64,
    /// Capital city display name (not localized)
    pub capital: String,
    /// Localized names keyed by English language name (e.g., "Korean")
    #[serde(deserialize_with = "deserialize_names")]
    pub name: BTreeMap<String, String>,
}

/// Null translations in the data are treated as missing.
fn deserialize_names<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let names = BTreeMap::<String, Option<String>>::deserialize(deserializer)?;
    Ok(names
        .into_iter()
        .filter_map(|(language, name)| name.map(|name| (language, name)))
        .collect())
}

impl CountryRecord {
    /// Get the localized name for a language, if this country has one.
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.name.get(language).map(String::as_str)
    }

    /// Get the English name.
    ///
    /// Datasets only accept records that carry an English name, so this is
    /// empty only for records built by hand outside a `Dataset`.
    pub fn english_name(&self) -> &str {
        self.name_in(Language::canonical().name()).unwrap_or_default()
    }
}

/// A country projected into one language, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub code: String,
    pub continent: String,
    /// Area formatted for the display language (e.g., "652,230")
    pub area_in_km2: String,
    /// Population formatted for the display language (e.g., "3,55,30,081")
    pub population: String,
    pub capital: String,
    /// Country name in the display language
    pub name: String,
}

/// Returns a copy of `country` with the name switched to `language` and the
/// numbers formatted for it.
///
/// `language` must be one of the supported languages, or at least a key of
/// the country's names. A supported language this country has no name in
/// falls back to the English name.
///
/// # Errors
/// `Error::UnrecognizedLanguage` for any other language.
pub fn country_for_language(country: &CountryRecord, language: &str) -> Result<DisplayRecord> {
    let name = match country.name_in(language) {
        Some(name) => name,
        None if LanguageRegistry::get().is_supported(language) => country.english_name(),
        None => return Err(Error::UnrecognizedLanguage(language.to_string())),
    };

    Ok(DisplayRecord {
        code: country.code.clone(),
        continent: country.continent.clone(),
        area_in_km2: format_number_for_language(country.area_in_km2, language),
        population: format_count_for_language(country.population, language),
        capital: country.capital.clone(),
        name: name.to_string(),
    })
}
