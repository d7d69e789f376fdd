//! AddressBook: the name-keyed collection of records.

use super::record::Record;
use crate::error::{BookError, BookResult};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Records keyed by contact name.
///
/// Names are unique. Adding a record under a name that is already present
/// replaces the stored record but keeps its original position in the
/// iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();

        if self.records.insert(name.clone(), record).is_some() {
            debug!(contact = %name, "Replaced existing record");
        } else {
            debug!(contact = %name, "Added record");
            self.order.push(name);
        }
    }

    /// Store a dynamically-typed value as a record.
    ///
    /// The value must be a JSON object that deserializes as a [`Record`]: a
    /// string `name`, and optionally `phones` and `birthday` that pass
    /// validation. Any other key makes the value not a record.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotARecord` if the value is not record-shaped.
    /// Nothing is stored in that case.
    pub fn add_record_value(&mut self, value: serde_json::Value) -> BookResult<()> {
        // serde's derived struct visitor also accepts sequences
        if !value.is_object() {
            return Err(BookError::NotARecord(format!("expected an object, got {}", value)));
        }
        let record: Record =
            serde_json::from_value(value).map_err(|e| BookError::NotARecord(e.to_string()))?;
        self.add_record(record);
        Ok(())
    }

    /// Get the record stored under `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Get a mutable reference to the record stored under `name`.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`, returning it if it was present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.remove(name)?;
        self.order.retain(|n| n != name);
        debug!(contact = %name, "Deleted record");
        Some(removed)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            names: self.order.iter(),
            records: &self.records,
        }
    }
}

/// Iterator over the entries of an [`AddressBook`], in insertion order.
pub struct Iter<'a> {
    names: std::slice::Iter<'a, String>,
    records: &'a HashMap<String, Record>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.names.next()?;
        // `order` and `records` always hold the same keys
        self.records.get(name).map(|record| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a str, &'a Record);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, record) in self {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with_phone(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name);
        record.add_phone(phone);
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        let record = record_with_phone("John", "1234567890");
        book.add_record(record.clone());

        assert_eq!(book.find("John"), Some(&record));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_find_missing() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_same_name_overwrites() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(record_with_phone("Jane", "9876543210"));
        book.add_record(record_with_phone("John", "5555555555"));

        assert_eq!(book.len(), 2);
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "5555555555"
        );
        // Overwrite keeps the original slot
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["John", "Jane"]);
    }

    #[test]
    fn test_delete() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("Jane", "9876543210"));

        let removed = book.delete("Jane");
        assert_eq!(removed.unwrap().name().as_str(), "Jane");
        assert!(book.find("Jane").is_none());
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("John"));
        assert!(book.delete("Jane").is_none());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_iteration_order() {
        let mut book = AddressBook::new();
        for name in ["Carol", "Alice", "Bob"] {
            book.add_record(Record::new(name));
        }
        book.delete("Alice");
        book.add_record(Record::new("Alice"));

        let names: Vec<&str> = book.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Carol", "Bob", "Alice"]);
    }

    #[test]
    fn test_find_mut_edits_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));

        if let Some(john) = book.find_mut("John") {
            john.edit_phone("1234567890", "1112223333");
        }
        assert!(book.find("John").unwrap().find_phone("1112223333").is_some());
    }

    #[test]
    fn test_add_record_value() {
        let mut book = AddressBook::new();
        book.add_record_value(json!({
            "name": "John",
            "phones": ["123-456-7890"],
            "birthday": "28/03/1996"
        }))
        .unwrap();

        assert_eq!(
            book.find("John").unwrap().to_string(),
            "Contact name: John, phones: 1234567890, birthday: 28/03/1996"
        );
    }

    #[test]
    fn test_add_record_value_rejects_non_records() {
        let mut book = AddressBook::new();

        for value in [
            json!("John"),
            json!(42),
            json!(null),
            json!(["John"]),
            json!({"phones": ["1234567890"]}),
            json!({"name": "John", "phones": ["12345"]}),
            json!(["Eve", ["1234567890"], "28/03/1996"]),
            json!({"name": "John", "title": "not a contact field"}),
        ] {
            let result = book.add_record_value(value);
            assert!(matches!(result, Err(BookError::NotARecord(_))));
        }
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_record_value_rejects_sequences() {
        let mut book = AddressBook::new();

        let err = book.add_record_value(json!(["John"])).unwrap_err();
        assert!(err.to_string().contains("expected an object"));
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_display_lists_records() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phone("John", "1234567890"));
        book.add_record(Record::new("Jane"));

        assert_eq!(
            book.to_string(),
            "Contact name: John, phones: 1234567890, birthday: No birthday\n\
             Contact name: Jane, phones: No phones, birthday: No birthday\n"
        );
    }
}
