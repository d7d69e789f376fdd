//! Field: the labeled optional value shared by every contact attribute.

use std::fmt;

/// A single optional string value.
///
/// `Name`, `Phone` and `Birthday` all wrap a `Field`. It carries no rules
/// of its own; the wrappers decide what a valid value looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Field {
    value: Option<String>,
}

impl Field {
    /// Create a field holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Create a field with no value.
    pub fn empty() -> Self {
        Self { value: None }
    }

    /// Get the value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Whether the field holds no value or an empty string.
    pub fn is_blank(&self) -> bool {
        self.value.as_deref().map_or(true, str::is_empty)
    }

    /// Replace the stored value.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.write_str(value),
            None => f.write_str("None"),
        }
    }
}
