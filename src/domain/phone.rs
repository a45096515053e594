//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// International format: optional `+`, then 8 to 15 ASCII digits, no leading zero.
static INTERNATIONAL_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{7,14}$").expect("Failed to compile phone number regex")
});

/// A type-safe wrapper for phone numbers entered by the user.
///
/// Only numbers in international format are accepted. Surrounding
/// whitespace is trimmed before validation; inner formatting characters
/// (spaces, dashes, parentheses) are rejected.
///
/// # Example
///
/// ```
/// use amber_safe::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new(" +1234567890 ").unwrap();
/// assert_eq!(phone.as_str(), "+1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Check a phone string against the international pattern.
    pub fn is_valid(phone: &str) -> bool {
        INTERNATIONAL_PHONE.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
