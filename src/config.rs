//! Configuration for the demo binary.
//!
//! The core library takes no configuration; this module only tells the demo
//! entry point where to find its CSV file and how verbose to be. Values come
//! from environment variables, with a `.env` file honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default location of the bundled sample CSV.
const DEFAULT_CSV_PATH: &str = "data/contacts.csv";

/// Configuration for the demo binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the CSV file to load
    pub csv_path: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_CSV_PATH`: CSV file to load (default: `data/contacts.csv`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `CONTACTS_CSV_PATH` is set
    /// but blank.
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if one exists, without failing when absent
        let _ = dotenvy::dotenv();

        let csv_path =
            env::var("CONTACTS_CSV_PATH").unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string());
        if csv_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_CSV_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            csv_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: DEFAULT_CSV_PATH.to_string(),
            log_level: "error".to_string(),
        }
    }
}
