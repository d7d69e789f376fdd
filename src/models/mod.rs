//! Contact book data models.
//!
//! A [`Record`] aggregates a contact's fields; an [`AddressBook`] owns
//! records keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
