//! Field validation errors.

use std::fmt;

/// Errors that can occur while validating a phone or birthday field.
///
/// The payload is the raw input that was rejected. It is kept for logging
/// and is not part of the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number does not normalize to exactly 10 digits.
    InvalidPhone(String),

    /// The birthday does not parse as a date in the expected format.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => value,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => write!(f, "Phone number must be exactly 10 digits"),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD/MM/YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::InvalidPhone("12345".to_string());
        assert_eq!(err.to_string(), "Phone number must be exactly 10 digits");

        let err = ValidationError::InvalidBirthday("1996-03-28".to_string());
        assert_eq!(err.to_string(), "Invalid date format. Use DD/MM/YYYY");
    }

    #[test]
    fn test_validation_error_input() {
        let err = ValidationError::InvalidPhone("555-12".to_string());
        assert_eq!(err.input(), "555-12");
    }
}
