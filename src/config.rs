//! Configuration management for the contact book.
//!
//! Settings come from environment variables, with an optional `.env` file
//! loaded first.

use crate::domain::DEFAULT_BIRTHDAY_FORMAT;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;
use std::fmt::Write;

/// Runtime settings for the contact book driver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// chrono format for birthdays (default: "%d/%m/%Y")
    pub birthday_format: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACT_BOOK_BIRTHDAY_FORMAT`: Birthday date format (default: "%d/%m/%Y")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_format = env::var("CONTACT_BOOK_BIRTHDAY_FORMAT")
            .unwrap_or_else(|_| DEFAULT_BIRTHDAY_FORMAT.to_string());
        Self::check_birthday_format(&birthday_format)?;

        Ok(Config {
            log_level,
            birthday_format,
        })
    }

    /// A format is usable if a known date rendered with it parses back.
    fn check_birthday_format(fmt: &str) -> ConfigResult<()> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            var: "CONTACT_BOOK_BIRTHDAY_FORMAT".to_string(),
            reason: reason.to_string(),
        };

        if fmt.trim().is_empty() {
            return Err(invalid("Cannot be empty"));
        }

        let probe = NaiveDate::from_ymd_opt(1996, 3, 28)
            .ok_or_else(|| ConfigError::Other("probe date out of range".to_string()))?;

        let mut rendered = String::new();
        write!(rendered, "{}", probe.format(fmt)).map_err(|_| invalid("Not a valid date format"))?;

        match NaiveDate::parse_from_str(&rendered, fmt) {
            Ok(parsed) if parsed == probe => Ok(()),
            _ => Err(invalid("Must contain day, month and year")),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            birthday_format: DEFAULT_BIRTHDAY_FORMAT.to_string(),
        }
    }
}
