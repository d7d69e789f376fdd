//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static NON_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").expect("valid regex"));
static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// A phone number attached to a record.
///
/// A freshly constructed `Phone` holds its raw input. [`Phone::validate`]
/// normalizes it to exactly 10 digits, or rejects it and leaves the raw
/// value in place.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::parse("123-456-7890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(Field);

impl Phone {
    /// Create an unvalidated phone holding `raw` as-is.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Field::new(raw))
    }

    /// Create and validate a phone in one step.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `raw` does not contain
    /// exactly 10 digits.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let mut phone = Self::new(raw);
        phone.validate()?;
        Ok(phone)
    }

    /// Normalize the stored value to its digits.
    ///
    /// # Validation Rules
    ///
    /// - Every character that is not `0-9` is stripped
    /// - The remaining string must be exactly 10 digits
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` when the digit count is wrong.
    /// The stored value is not modified in that case.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let raw = self.as_str();
        let normalized = NON_DIGIT.replace_all(raw, "").into_owned();

        if !TEN_DIGITS.is_match(&normalized) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        self.0.set(normalized);
        Ok(())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.value().unwrap_or_default()
    }

    /// Whether the stored value is already a normalized 10-digit number.
    pub fn is_normalized(&self) -> bool {
        TEN_DIGITS.is_match(self.as_str())
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
