//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, DEFAULT_BIRTHDAY_FORMAT};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Mutators that take raw input validate it first. Invalid input is logged
/// and dropped; the record is left as it was and no error reaches the caller.
/// The `bool` they return tells whether the change was applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Name the record is keyed by
    name: Name,

    /// Phone numbers in insertion order (duplicates allowed)
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, if one has been set
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// Returns `false` and logs a warning if the phone is invalid.
    pub fn add_phone(&mut self, phone: &str) -> bool {
        match Phone::parse(phone) {
            Ok(phone) => {
                self.phones.push(phone);
                true
            }
            Err(e) => {
                warn!(contact = %self.name, input = e.input(), "{}", e);
                false
            }
        }
    }

    /// Validate `birthday` as `DD/MM/YYYY` and set it, replacing any previous one.
    ///
    /// Returns `false` and logs a warning if the date is invalid.
    pub fn add_birthday(&mut self, birthday: &str) -> bool {
        self.add_birthday_with_format(birthday, DEFAULT_BIRTHDAY_FORMAT)
    }

    /// Like [`Record::add_birthday`], with a chrono format string.
    pub fn add_birthday_with_format(&mut self, birthday: &str, fmt: &str) -> bool {
        match Birthday::parse_with_format(birthday, fmt) {
            Ok(birthday) => {
                self.birthday = Some(birthday);
                true
            }
            Err(e) => {
                warn!(contact = %self.name, input = e.input(), "{}", e);
                false
            }
        }
    }

    /// Remove every phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`, in place.
    ///
    /// Returns `false` if `old_phone` is not on the record, or if `new_phone`
    /// fails validation (logged). The list is unchanged in both cases.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> bool {
        let Some(idx) = self.phones.iter().position(|p| p.as_str() == old_phone) else {
            return false;
        };

        match Phone::parse(new_phone) {
            Ok(phone) => {
                self.phones[idx] = phone;
                true
            }
            Err(e) => {
                warn!(contact = %self.name, input = e.input(), "{}", e);
                false
            }
        }
    }

    /// Find the first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phones".to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join("; ")
        };

        write!(f, "Contact name: {}, phones: {}, birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("No birthday"),
        }
    }
}
