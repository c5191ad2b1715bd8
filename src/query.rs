//! Queries over the country dataset.
//!
//! Every query walks the dataset in order and returns freshly projected
//! display records. Nothing is cached between calls.

use crate::country::{country_for_language, CountryRecord, DisplayRecord};
use crate::dataset::Dataset;
use crate::i18n::Language;
use tracing::{debug, warn};

/// Query layer over an injected, read-only dataset.
#[derive(Debug, Clone, Copy)]
pub struct CountryQuery<'a> {
    dataset: &'a Dataset,
}

impl<'a> CountryQuery<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// All countries, with names in `language`, or English for countries
    /// that have no name in it.
    ///
    /// Returns exactly one record per country and never fails on a missing
    /// translation.
    pub fn countries_by_language(&self, language: &str) -> Vec<DisplayRecord> {
        let countries: Vec<_> = self
            .dataset
            .iter()
            .filter_map(|country| {
                let projection = if country.name_in(language).is_some() {
                    language
                } else {
                    Language::canonical().name()
                };
                project(country, projection)
            })
            .collect();

        debug!("countries_by_language({}) -> {}", language, countries.len());
        countries
    }

    /// Countries with `population >= min_population`, and also
    /// `population <= max_population` when a maximum is given. Both bounds
    /// are inclusive. Names are in English.
    ///
    /// An inverted range (`min > max`) is not rejected; it simply matches
    /// nothing.
    pub fn countries_by_population(
        &self,
        min_population: f64,
        max_population: Option<f64>,
    ) -> Vec<DisplayRecord> {
        let countries = self.english(|country| {
            let population = country.population as f64;
            population >= min_population && max_population.map_or(true, |max| population <= max)
        });

        debug!(
            "countries_by_population({}, {:?}) -> {}",
            min_population,
            max_population,
            countries.len()
        );
        countries
    }

    /// Countries whose continent is exactly `continent` (case-sensitive) with
    /// an area of at least `min_area` square kilometres. Names are in English.
    pub fn countries_by_area_and_continent(
        &self,
        continent: &str,
        min_area: f64,
    ) -> Vec<DisplayRecord> {
        let countries = self
            .english(|country| country.continent == continent && country.area_in_km2 >= min_area);

        debug!(
            "countries_by_area_and_continent({}, {}) -> {}",
            continent,
            min_area,
            countries.len()
        );
        countries
    }

    fn english<F>(&self, include: F) -> Vec<DisplayRecord>
    where
        F: Fn(&CountryRecord) -> bool,
    {
        let english = Language::canonical().name();
        self.dataset
            .iter()
            .filter(|&country| include(country))
            .filter_map(|country| project(country, english))
            .collect()
    }
}

/// Project a country for a query.
///
/// Queries only project into languages the country has a name in, or into a
/// supported language, so this never drops a record for a valid dataset.
fn project(country: &CountryRecord, language: &str) -> Option<DisplayRecord> {
    match country_for_language(country, language) {
        Ok(display) => Some(display),
        Err(e) => {
            warn!("Skipping country {}: {}", country.code, e);
            None
        }
    }
}
