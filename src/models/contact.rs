//! Contact model representing one emergency contact held by the remote store.

use crate::domain::{ContactId, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};

/// A contact as returned by the contact store.
///
/// The store is authoritative, so the phone is kept exactly as stored and is
/// not re-validated on the way in. Unknown fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "StoredContact")]
pub struct Contact {
    /// Identifier assigned by the store (`id`, or `_id` on document stores)
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Phone number as stored
    pub phone: String,
}

/// Wire shape of a stored contact. Document stores send `_id`, sometimes
/// next to a virtual `id`; `id` wins when both are present.
#[derive(Deserialize)]
struct StoredContact {
    id: Option<ContactId>,
    #[serde(rename = "_id")]
    document_id: Option<ContactId>,
    name: String,
    phone: String,
}

impl TryFrom<StoredContact> for Contact {
    type Error = ValidationError;

    fn try_from(stored: StoredContact) -> Result<Self, Self::Error> {
        let id = stored
            .id
            .or(stored.document_id)
            .ok_or(ValidationError::EmptyId)?;
        Ok(Self::new(id, stored.name, stored.phone))
    }
}

impl Contact {
    /// Create a contact from already-persisted values.
    pub fn new(id: ContactId, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
        }
    }

    /// Label shown in the contact list, e.g. `Jane - +1234567890`.
    pub fn list_label(&self) -> String {
        format!("{} - {}", self.name, self.phone)
    }

    /// Entry used in alert messages, e.g. `Jane (+1234567890)`.
    pub fn alert_entry(&self) -> String {
        format!("{} ({})", self.name, self.phone)
    }

    /// Whether this contact carries the given name and phone.
    pub fn matches(&self, new_contact: &NewContact) -> bool {
        self.name == new_contact.name && self.phone == new_contact.phone.as_str()
    }
}

/// A validated contact that has not been persisted yet.
///
/// Serializes to the `{name, phone}` payload the store expects on create.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: PhoneNumber,
}

impl NewContact {
    /// Validate raw form input.
    ///
    /// Both fields are trimmed. The name must be non-empty and the phone must
    /// be in international format.
    pub fn new(name: &str, phone: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let phone = PhoneNumber::new(phone)?;

        Ok(Self {
            name: name.to_string(),
            phone,
        })
    }
}
