//! Menu items of the countries page.
//!
//! Each item selects a set of countries through the query layer and comes
//! with the subtitle shown above the table.

use crate::country::DisplayRecord;
use crate::i18n::{Language, LanguageRegistry};
use crate::query::CountryQuery;
use std::fmt;

const TITLE: &str = "List of Countries and Dependencies";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// All countries, named in the given language
    Language(Language),
    /// Population between 1 and 2 million
    Population1mTo2m,
    /// Population of at least 100 million
    PopulationOver100m,
    /// Every country in Asia
    AsiaAll,
    /// Countries in the Americas with at least 1 million km2
    Americas1mKm2,
}

impl MenuItem {
    /// All menu items, in page order.
    pub fn all() -> Vec<MenuItem> {
        let mut items: Vec<MenuItem> = LanguageRegistry::get()
            .list_all()
            .into_iter()
            .filter_map(|config| Language::from_code(config.code))
            .map(MenuItem::Language)
            .collect();
        items.extend([
            MenuItem::Population1mTo2m,
            MenuItem::PopulationOver100m,
            MenuItem::AsiaAll,
            MenuItem::Americas1mKm2,
        ]);
        items
    }

    /// Element id of the menu item (e.g., "menu_french").
    pub fn id(&self) -> String {
        match self {
            MenuItem::Language(language) => {
                format!("menu_{}", language.name().to_ascii_lowercase())
            }
            MenuItem::Population1mTo2m => "menu_population_1m_2m".to_string(),
            MenuItem::PopulationOver100m => "menu_population_100_000_000m".to_string(),
            MenuItem::AsiaAll => "menu_asia_all".to_string(),
            MenuItem::Americas1mKm2 => "menu_americas_1mkm".to_string(),
        }
    }

    /// Look up a menu item by its element id.
    pub fn from_id(id: &str) -> Option<MenuItem> {
        Self::all().into_iter().find(|item| item.id() == id)
    }

    /// Heading shown above the table for this selection.
    pub fn subtitle(&self) -> String {
        let detail = match self {
            MenuItem::Language(language) => format!(
                "Country names in {} ({})",
                language.name(),
                language.native_name()
            ),
            MenuItem::Population1mTo2m => "Population between 1 and 2 million".to_string(),
            MenuItem::PopulationOver100m => "Population Greater than 100 Million".to_string(),
            MenuItem::AsiaAll => "All countries in Asia".to_string(),
            MenuItem::Americas1mKm2 => "Area greater than 1 million Km2, Americas".to_string(),
        };
        format!("{} - {}", TITLE, detail)
    }

    /// Language the selected rows are displayed in.
    pub fn display_language(&self) -> Language {
        match self {
            MenuItem::Language(language) => *language,
            _ => Language::canonical(),
        }
    }

    /// Run the query behind this menu item.
    pub fn select(&self, query: &CountryQuery<'_>) -> Vec<DisplayRecord> {
        match self {
            MenuItem::Language(language) => query.countries_by_language(language.name()),
            MenuItem::Population1mTo2m => {
                query.countries_by_population(1_000_000.0, Some(2_000_000.0))
            }
            MenuItem::PopulationOver100m => query.countries_by_population(100_000_000.0, None),
            MenuItem::AsiaAll => query.countries_by_area_and_continent("Asia", 0.0),
            MenuItem::Americas1mKm2 => {
                query.countries_by_area_and_continent("Americas", 1_000_000.0)
            }
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
