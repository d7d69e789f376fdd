//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The `DD/MM/YYYY` pattern in chrono syntax.
pub const DEFAULT_BIRTHDAY_FORMAT: &str = "%d/%m/%Y";

static DEFAULT_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&shape_pattern(DEFAULT_BIRTHDAY_FORMAT)).expect("valid regex")
});

/// Anchored regex for the text a chrono format may match.
///
/// chrono is lenient about field widths (`%Y` takes any number of digits,
/// a sign and leading spaces). Inputs are held to fixed widths instead:
/// `%Y` is four digits, `%y` two, and day/month/time fields one or two.
/// Other specifiers match any non-empty text and are left to chrono.
fn shape_pattern(fmt: &str) -> String {
    let mut pattern = String::from("^");
    let mut chars = fmt.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
            continue;
        }
        match chars.next() {
            Some('Y') => pattern.push_str("[0-9]{4}"),
            Some('y') => pattern.push_str("[0-9]{2}"),
            Some('d' | 'm' | 'H' | 'M' | 'S') => pattern.push_str("[0-9]{1,2}"),
            Some('%') => pattern.push('%'),
            _ => pattern.push_str(".+?"),
        }
    }

    pattern.push('$');
    pattern
}

fn matches_shape(raw: &str, fmt: &str) -> bool {
    if fmt == DEFAULT_BIRTHDAY_FORMAT {
        return DEFAULT_SHAPE.is_match(raw);
    }
    Regex::new(&shape_pattern(fmt)).map_or(false, |shape| shape.is_match(raw))
}

/// A contact's birthday.
///
/// Keeps the raw string as entered, plus the parsed date once
/// [`Birthday::validate`] has succeeded.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("28/03/1996").unwrap();
/// assert_eq!(birthday.to_string(), "28/03/1996");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    field: Field,
    date: Option<NaiveDate>,
}

impl Birthday {
    /// Create an unvalidated birthday holding `raw` as-is.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            field: Field::new(raw),
            date: None,
        }
    }

    /// Create and validate a birthday against `DD/MM/YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `raw` is not a valid date.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        Self::parse_with_format(raw, DEFAULT_BIRTHDAY_FORMAT)
    }

    /// Create and validate a birthday against a chrono format string.
    pub fn parse_with_format(raw: impl Into<String>, fmt: &str) -> Result<Self, ValidationError> {
        let mut birthday = Self::new(raw);
        birthday.validate(fmt)?;
        Ok(birthday)
    }

    /// Parse the stored value as a date in `fmt`.
    ///
    /// Out-of-range dates such as `31/02/2020` are rejected, and so are
    /// short or signed years (`28/03/96`, `28/03/+1996`) and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when parsing fails. Nothing
    /// is recorded in that case.
    pub fn validate(&mut self, fmt: &str) -> Result<NaiveDate, ValidationError> {
        let raw = self.field.value().unwrap_or_default();
        if !matches_shape(raw, fmt) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        let date = NaiveDate::parse_from_str(raw, fmt)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;

        self.date = Some(date);
        Ok(date)
    }

    /// Validate against `DD/MM/YYYY`.
    pub fn validate_default(&mut self) -> Result<NaiveDate, ValidationError> {
        self.validate(DEFAULT_BIRTHDAY_FORMAT)
    }

    /// Get the raw value as a string slice.
    pub fn as_str(&self) -> &str {
        self.field.value().unwrap_or_default()
    }

    /// The parsed date, if validation has succeeded.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_blank() {
            return f.write_str("No birthday");
        }
        write!(f, "{}", self.field)
    }
}
