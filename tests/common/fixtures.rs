//! Sample records used across integration tests.

use contact_book::{AddressBook, Record};

/// John: two phones and a birthday.
pub fn sample_john() -> Record {
    let mut record = Record::new("John");
    record.add_phone("1234567890");
    record.add_phone("5555555555");
    record.add_birthday("28/03/1996");
    record
}

/// Jane: a single phone, no birthday.
pub fn sample_jane() -> Record {
    let mut record = Record::new("Jane");
    record.add_phone("9876543210");
    record
}

/// A book holding John then Jane.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_john());
    book.add_record(sample_jane());
    book
}
