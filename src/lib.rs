//! Contact Book - an in-memory address book with validated contact fields.
//!
//! Records hold a name, a list of phone numbers normalized to 10 digits,
//! and an optional `DD/MM/YYYY` birthday. The address book keys records by
//! name and keeps them in insertion order.
//!
//! # Architecture
//!
//! - **domain**: Field value objects (`Name`, `Phone`, `Birthday`) and their validation
//! - **models**: `Record` and `AddressBook`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::{AddressBook, Record};
