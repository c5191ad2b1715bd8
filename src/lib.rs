//! Filter and localize a dataset of countries, and render it as an HTML table.
//!
//! ```rust
//! use country_table::{CountryQuery, Dataset};
//!
//! let dataset = Dataset::from_json_str(r#"[{
//!     "code": "AF", "continent": "Asia", "areaInKm2": 652230,
//!     "population": 35530081, "capital": "Kabul",
//!     "name": { "English": "Afghanistan", "Korean": "아프가니스탄" }
//! }]"#)?;
//!
//! let korean = CountryQuery::new(&dataset).countries_by_language("Korean");
//! assert_eq!(korean[0].name, "아프가니스탄");
//! assert_eq!(korean[0].population, "35,530,081");
//! # Ok::<(), country_table::Error>(())
//! ```

pub mod config;
pub mod country;
pub mod dataset;
pub mod error;
pub mod i18n;
pub mod menu;
pub mod query;
pub mod view;

pub use country::{country_for_language, CountryRecord, DisplayRecord};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use menu::MenuItem;
pub use query::CountryQuery;
pub use view::{FlagSize, TableRenderer};
