//! Contact Book - demo driver
//!
//! Builds a small address book, prints it, edits a phone number, looks one
//! up and deletes a record. Demo output goes to stdout, logs to stderr.

use anyhow::Result;
use contact_book::{AddressBook, Config, Record};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890");
    john.add_phone("5555555555");
    john.add_birthday_with_format("28/03/1996", &config.birthday_format);
    book.add_record(john);

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210");
    book.add_record(jane);

    print!("{}", book);

    if let Some(john) = book.find_mut("John") {
        john.edit_phone("1234567890", "1112223333");
    }

    if let Some(john) = book.find("John") {
        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    book.delete("Jane");
    info!(records = book.len(), "Demo complete");

    Ok(())
}
