//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic is contained here: the supported language
//! registry, the validated `Language` type, and locale-aware number
//! formatting.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type and the name → code lookup
//! - `format`: Number formatting per language locale
//!
//! # Example
//!
//! ```rust
//! use country_table::i18n::{format_number_for_language, lang_code_for_language};
//!
//! assert_eq!(lang_code_for_language("Korean"), Some("ko"));
//! assert_eq!(lang_code_for_language("German"), None);
//! assert_eq!(format_number_for_language(652230.0, "Hindi"), "6,52,230");
//! ```

mod format;
mod language;
mod registry;

pub use format::{format_count_for_language, format_number_for_language};
pub use language::{lang_code_for_language, Language};
pub use registry::{LanguageConfig, LanguageRegistry};
