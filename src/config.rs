use crate::view::{FlagSize, DEFAULT_FLAG_BASE_URL};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Data
    pub countries_data_file: String,

    // Flags
    pub flag_base_url: String,
    pub flag_size: FlagSize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let flag_size = match std::env::var("FLAG_SIZE") {
            Ok(value) => {
                let pixels: u32 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("FLAG_SIZE is not a number: '{}'", value))?;
                FlagSize::try_from(pixels).context("FLAG_SIZE is not a supported flag size")?
            }
            Err(_) => FlagSize::default(),
        };

        Ok(Self {
            countries_data_file: std::env::var("COUNTRIES_DATA_FILE")
                .unwrap_or_else(|_| "data/countries.json".to_string()),

            flag_base_url: std::env::var("FLAG_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FLAG_BASE_URL.to_string()),
            flag_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["COUNTRIES_DATA_FILE", "FLAG_BASE_URL", "FLAG_SIZE"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Defaults should load");
        assert_eq!(config.countries_data_file, "data/countries.json");
        assert_eq!(config.flag_base_url, "https://www.countryflags.io");
        assert_eq!(config.flag_size, FlagSize::Px32);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("COUNTRIES_DATA_FILE", "/tmp/countries.json");
        std::env::set_var("FLAG_BASE_URL", "http://localhost:9000");
        std::env::set_var("FLAG_SIZE", "64");

        let config = Config::from_env().expect("Overrides should load");
        clear_env();

        assert_eq!(config.countries_data_file, "/tmp/countries.json");
        assert_eq!(config.flag_base_url, "http://localhost:9000");
        assert_eq!(config.flag_size, FlagSize::Px64);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unsupported_flag_size() {
        clear_env();
        std::env::set_var("FLAG_SIZE", "20");

        let result = Config::from_env();
        clear_env();

        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid flag size 20"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_non_numeric_flag_size() {
        clear_env();
        std::env::set_var("FLAG_SIZE", "large");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }
}
