//! Print the countries table for one menu selection.
//!
//! Usage:
//!   cargo run                              # All countries, English names
//!   cargo run -- menu_hindi                # All countries, Hindi names
//!   cargo run -- menu_asia_all --json      # Display records as JSON
//!
//! Optional environment variables:
//! - COUNTRIES_DATA_FILE (defaults to data/countries.json)
//! - FLAG_BASE_URL (defaults to https://www.countryflags.io)
//! - FLAG_SIZE (defaults to 32; one of 16, 24, 32, 48, 64)

use anyhow::{bail, Context, Result};
use country_table::config::Config;
use country_table::i18n::Language;
use country_table::view::escape_html;
use country_table::{CountryQuery, Dataset, MenuItem, TableRenderer};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging (stderr, so the table can be piped)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("country_table=info".parse()?),
        )
        .init();

    let mut json = false;
    let mut menu_id = None;
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if menu_id.is_none() {
            menu_id = Some(arg);
        } else {
            bail!("Unexpected argument: '{}'", arg);
        }
    }

    let item = match menu_id {
        Some(id) => match MenuItem::from_id(&id) {
            Some(item) => item,
            None => {
                let valid: Vec<String> = MenuItem::all().iter().map(MenuItem::id).collect();
                bail!(
                    "Unknown menu item '{}', expected one of: {}",
                    id,
                    valid.join(", ")
                );
            }
        },
        None => MenuItem::Language(Language::canonical()),
    };

    let config = Config::from_env()?;
    let dataset = Dataset::from_file(&config.countries_data_file).with_context(|| {
        format!(
            "Failed to load countries from {}",
            config.countries_data_file
        )
    })?;

    info!("Selecting {}", item);
    let countries = item.select(&CountryQuery::new(&dataset));
    info!("Selected {} of {} countries", countries.len(), dataset.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
        return Ok(());
    }

    let renderer = TableRenderer::new(config.flag_base_url, config.flag_size);
    println!("<h4>{}</h4>", escape_html(&item.subtitle()));
    println!(
        "{}",
        renderer.countries_to_table(&countries, item.display_language().name())
    );

    Ok(())
}
