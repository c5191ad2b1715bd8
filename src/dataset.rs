//! The read-only country dataset.
//!
//! A `Dataset` is built once, validated, and then only ever borrowed by the
//! query layer. Nothing mutates it after construction.

use crate::country::CountryRecord;
use crate::error::{Error, Result};
use crate::i18n::Language;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// An ordered, validated collection of country records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    countries: Vec<CountryRecord>,
}

impl Dataset {
    /// Build a dataset from records, keeping their order.
    ///
    /// # Errors
    /// `Error::InvalidRecord` if a code is empty or repeated, a record has no
    /// English name, or an area is negative or not finite.
    pub fn new(countries: Vec<CountryRecord>) -> Result<Self> {
        let canonical = Language::canonical().name();
        let mut seen = HashSet::with_capacity(countries.len());

        for country in &countries {
            let invalid = |reason: &str| Error::InvalidRecord {
                code: country.code.clone(),
                reason: reason.to_string(),
            };

            if country.code.is_empty() {
                return Err(invalid("country code is empty"));
            }
            if !seen.insert(country.code.as_str()) {
                return Err(invalid("duplicate country code"));
            }
            if country.name_in(canonical).is_none() {
                return Err(invalid("missing English name"));
            }
            if !country.area_in_km2.is_finite() || country.area_in_km2 < 0.0 {
                return Err(invalid("area must be a non-negative number"));
            }
        }

        debug!("Built dataset with {} countries", countries.len());
        Ok(Self { countries })
    }

    /// Parse a dataset from a JSON array of country records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let countries: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::new(countries)
    }

    /// Load a dataset from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        info!(
            "Loaded {} countries from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Iterate over the records in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, CountryRecord> {
        self.countries.iter()
    }

    /// Find a record by its country code.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.countries.iter().find(|country| country.code == code)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CountryRecord;
    type IntoIter = std::slice::Iter<'a, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
