//! Language type: Validated language representation.
//!
//! Languages are identified by their English name (the keys of a country's
//! `name` map), and resolve to a 2-letter code through the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use num_format::CustomFormat;

/// A validated, supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "ko")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const ARABIC: Language = Language { code: "ar" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const HINDI: Language = Language { code: "hi" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const KOREAN: Language = Language { code: "ko" };
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Create a Language from its English name (e.g., "Korean").
    ///
    /// # Returns
    /// * `Some(Language)` if the name is one of the supported languages
    /// * `None` otherwise (including names that differ only in case)
    pub fn from_name(name: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_name(name)
            .map(|config| Language { code: config.code })
    }

    /// Create a Language from a language code string (e.g., "ko").
    pub fn from_code(code: &str) -> Option<Language> {
        LanguageRegistry::get()
            .get_by_code(code)
            .map(|config| Language { code: config.code })
    }

    /// Get the canonical (fallback) language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_name`,
    /// `from_code` or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "Korean").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "한국어").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the number formatting symbols for this language.
    pub fn number_format(&self) -> &'static CustomFormat {
        &self.config().number_format
    }
}

/// Given a language name, returns the 2-letter language code for it.
///
/// `lang_code_for_language("Korean")` returns `Some("ko")`, while
/// `lang_code_for_language("German")` returns `None`.
pub fn lang_code_for_language(language: &str) -> Option<&'static str> {
    Language::from_name(language).map(|lang| lang.code())
}
