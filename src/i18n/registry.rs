//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages a country
//! table can be displayed in. It uses a singleton pattern with `OnceLock` to
//! ensure thread-safe initialization and access.

use num_format::{CustomFormat, Locale};
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains the metadata for a specific language: its code, names, number
/// format, and whether it's the canonical (fallback) language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "hi", "ko")
    pub code: &'static str,

    /// English name of the language, as used for the keys of country names
    /// (e.g., "English", "Hindi", "Korean")
    pub name: &'static str,

    /// Native name of the language (e.g., "English", "हिन्दी", "한국어")
    pub native_name: &'static str,

    /// Number formatting symbols (grouping, separators, signs)
    pub number_format: CustomFormat,

    /// Whether this is the canonical/fallback language (only one should be true)
    pub is_canonical: bool,
}

/// Global language registry singleton.
///
/// It's initialized once on first access and remains immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its English name.
    ///
    /// Matching is exact and case-sensitive: "Korean" matches, "korean" does not.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_name(&self, name: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.name == name)
    }

    /// Get a language configuration by its code.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "ru")
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all languages, in menu order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language is the one every country is guaranteed to have a
    /// name in, and the one queries fall back to (English).
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.as_slice() {
            [] => panic!("No canonical language found in registry"),
            [config] => *config,
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }

    /// Check if a language name is supported.
    pub fn is_supported(&self, name: &str) -> bool {
        self.get_by_name(name).is_some()
    }
}

/// Arabic with Latin digits, as current CLDR formats `ar` by default: western
/// separators and a left-to-right mark before the minus sign.
///
/// # Panics
/// Panics if the symbols exceed num-format's length limits, which they don't.
fn arabic_latn_format() -> CustomFormat {
    CustomFormat::from(Locale::ar)
        .into_builder()
        .separator(",")
        .decimal(".")
        .minus_sign("\u{200e}-")
        .build()
        .expect("Arabic number symbols should fit num-format limits")
}

/// Default language configurations.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            number_format: CustomFormat::from(Locale::en),
            is_canonical: true,
        },
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            number_format: arabic_latn_format(),
            is_canonical: false,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            number_format: CustomFormat::from(Locale::zh),
            is_canonical: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            number_format: CustomFormat::from(Locale::fr),
            is_canonical: false,
        },
        LanguageConfig {
            code: "hi",
            name: "Hindi",
            native_name: "हिन्दी",
            number_format: CustomFormat::from(Locale::hi),
            is_canonical: false,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            number_format: CustomFormat::from(Locale::ja),
            is_canonical: false,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            number_format: CustomFormat::from(Locale::ko),
            is_canonical: false,
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            number_format: CustomFormat::from(Locale::ru),
            is_canonical: false,
        },
    ]
}
