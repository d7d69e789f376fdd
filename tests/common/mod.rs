//! Shared test utilities for the contact book integration tests.

use contact_book::{Phone, Record};

pub mod fixtures;

/// Collect a record's phone numbers as plain strings.
#[allow(dead_code)]
pub fn phone_strings(record: &Record) -> Vec<&str> {
    record.phones().iter().map(Phone::as_str).collect()
}

/// Assert that every phone on a record is a normalized 10-digit number.
#[allow(dead_code)]
pub fn assert_phones_normalized(record: &Record) {
    for phone in record.phones() {
        assert!(
            phone.is_normalized(),
            "Phone {} on {} should be 10 bare digits",
            phone,
            record.name()
        );
    }
}
