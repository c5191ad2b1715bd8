//! HTML rendering of display records into table rows.
//!
//! The table has one row per country with the columns flag, code, name,
//! continent, area, population and capital. The name cell carries a `lang`
//! attribute for the display language.

use crate::country::DisplayRecord;
use crate::error::Error;
use crate::i18n::lang_code_for_language;
use std::fmt;

/// Default flag image service.
pub const DEFAULT_FLAG_BASE_URL: &str = "https://www.countryflags.io";

/// Sizes the flag image service provides, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagSize {
    Px16,
    Px24,
    #[default]
    Px32,
    Px48,
    Px64,
}

impl FlagSize {
    pub fn pixels(&self) -> u32 {
        match self {
            FlagSize::Px16 => 16,
            FlagSize::Px24 => 24,
            FlagSize::Px32 => 32,
            FlagSize::Px48 => 48,
            FlagSize::Px64 => 64,
        }
    }
}

impl TryFrom<u32> for FlagSize {
    type Error = Error;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        match pixels {
            16 => Ok(FlagSize::Px16),
            24 => Ok(FlagSize::Px24),
            32 => Ok(FlagSize::Px32),
            48 => Ok(FlagSize::Px48),
            64 => Ok(FlagSize::Px64),
            other => Err(Error::InvalidFlagSize(other)),
        }
    }
}

impl fmt::Display for FlagSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

/// The `lang` attribute value for a language name.
///
/// Unknown languages get the empty "unknown language" code.
pub fn lang_attribute(language: &str) -> &'static str {
    lang_code_for_language(language).unwrap_or("")
}

/// URL of the flag image for a country code, e.g.
/// `https://www.countryflags.io/CA/flat/24.png`.
pub fn country_code_to_flag_url(base_url: &str, country_code: &str, size: FlagSize) -> String {
    format!(
        "{}/{}/flat/{}.png",
        base_url.trim_end_matches('/'),
        country_code,
        size
    )
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders display records as rows of the countries table.
#[derive(Debug, Clone)]
pub struct TableRenderer {
    flag_base_url: String,
    flag_size: FlagSize,
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_FLAG_BASE_URL, FlagSize::default())
    }
}

impl TableRenderer {
    pub fn new(flag_base_url: impl Into<String>, flag_size: FlagSize) -> Self {
        Self {
            flag_base_url: flag_base_url.into(),
            flag_size,
        }
    }

    /// `<img>` element for a country's flag.
    pub fn country_code_to_img(&self, country_code: &str) -> String {
        let src = country_code_to_flag_url(&self.flag_base_url, country_code, self.flag_size);
        format!(
            r#"<img src="{}" alt="{}">"#,
            escape_html(&src),
            escape_html(country_code)
        )
    }

    /// Render one country as a `<tr>` row.
    pub fn country_to_row(&self, country: &DisplayRecord, language: &str) -> String {
        let cells = [
            format!("<td>{}</td>", self.country_code_to_img(&country.code)),
            text_cell(&country.code),
            format!(
                r#"<td lang="{}">{}</td>"#,
                lang_attribute(language),
                escape_html(&country.name)
            ),
            text_cell(&country.continent),
            text_cell(&country.area_in_km2),
            text_cell(&country.population),
            text_cell(&country.capital),
        ];

        format!("<tr>{}</tr>", cells.concat())
    }

    /// Render the whole table body, one row per country, in order.
    ///
    /// The result replaces any previous table contents.
    pub fn countries_to_table(&self, countries: &[DisplayRecord], language: &str) -> String {
        countries
            .iter()
            .map(|country| self.country_to_row(country, language))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn text_cell(text: &str) -> String {
    format!("<td>{}</td>", escape_html(text))
}
