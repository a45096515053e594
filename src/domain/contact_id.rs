//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for the ids assigned by the contact store.
///
/// Stores disagree on whether ids are strings or numbers, so both JSON forms
/// are accepted and kept as their textual representation. An id can never be
/// empty.
///
/// # Example
///
/// ```
/// use amber_safe::domain::ContactId;
///
/// let id = ContactId::new("65f1c0a2").unwrap();
/// assert_eq!(id.as_str(), "65f1c0a2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Accepts `"abc"` as well as `42`
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        ContactId::new(id).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_valid() {
        let id = ContactId::new("contact_123").unwrap();
        assert_eq!(id.as_str(), "contact_123");
    }

    #[test]
    fn test_contact_id_rejects_empty() {
        assert_eq!(ContactId::new(""), Err(ValidationError::EmptyId));
        assert_eq!(ContactId::new("   "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_contact_id_serialization() {
        let id = ContactId::new("contact_123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"contact_123\"");
    }

    #[test]
    fn test_contact_id_deserialization() {
        let id: ContactId = serde_json::from_str("\"contact_123\"").unwrap();
        assert_eq!(id.as_str(), "contact_123");
    }

    #[test]
    fn test_contact_id_deserialization_numeric() {
        let id: ContactId = serde_json::from_str("17").unwrap();
        assert_eq!(id.as_str(), "17");
    }

    #[test]
    fn test_contact_id_deserialization_empty_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_id_deserialization_rejects_other_types() {
        let result: Result<ContactId, _> = serde_json::from_str("null");
        assert!(result.is_err());
        let result: Result<ContactId, _> = serde_json::from_str("{\"id\": 1}");
        assert!(result.is_err());
    }
}
