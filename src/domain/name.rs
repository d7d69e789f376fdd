//! Contact name.

use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The name a record is stored under in the address book.
///
/// Names are not validated. An empty name is a legal key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(Field);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Field::new(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value().unwrap_or_default()
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Name::new)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_display() {
        let name = Name::new("John");
        assert_eq!(name.as_str(), "John");
        assert_eq!(format!("{}", name), "John");
    }

    #[test]
    fn test_name_serde() {
        let name: Name = serde_json::from_str("\"Jane\"").unwrap();
        assert_eq!(name.as_str(), "Jane");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Jane\"");
    }
}
