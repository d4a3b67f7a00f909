//! Contact Book - Demo entry point
//!
//! Loads the configured CSV file and prints summary counts. This binary is a
//! convenience harness around the library; the core contract lives in
//! `contact_book` itself.

use anyhow::{Context, Result};
use contact_book::ingest::{load_with_sink, TracingSink};
use contact_book::query::{group_count_by_city, unique_cities};
use contact_book::Config;
use std::fs::File;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so stdout stays clean for the summary)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!("Loading contacts from {}", config.csv_path);

    let file = File::open(&config.csv_path)
        .with_context(|| format!("failed to open {}", config.csv_path))?;
    let contacts = load_with_sink(file, &mut TracingSink)?;

    println!("Loaded contacts: {}", contacts.len());
    println!("Cities: {:?}", unique_cities(&contacts));
    println!(
        "Contacts per city: {}",
        serde_json::to_string_pretty(&group_count_by_city(&contacts))?
    );

    Ok(())
}
