//! Alert message compiled from the contact list and the user's position.

use crate::error::GeolocationError;
use crate::geolocation::Coordinates;
use crate::models::Contact;
use crate::status::ALERT_SENT_MARKER;

/// An alert ready to be shown. Never persisted.
///
/// A failed position request degrades the alert instead of failing it: the
/// contact listing is still produced, annotated with the location error.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertMessage {
    pub contacts: Vec<Contact>,
    pub location: Result<Coordinates, GeolocationError>,
}

impl AlertMessage {
    pub fn new(contacts: Vec<Contact>, location: Result<Coordinates, GeolocationError>) -> Self {
        Self { contacts, location }
    }

    /// Whether the alert went out without a location.
    pub fn is_error(&self) -> bool {
        self.location.is_err()
    }

    /// One `name (phone)` line per contact.
    fn recipients(&self) -> String {
        self.contacts
            .iter()
            .map(Contact::alert_entry)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render the alert as status text, one item per line.
    pub fn render(&self) -> String {
        match &self.location {
            Ok(coordinates) => format!(
                "🚨 {} to:\n{}\n\n🌍 Location: {}",
                ALERT_SENT_MARKER,
                self.recipients(),
                coordinates.map_link()
            ),
            Err(error) => format!(
                "🚨 {} (without location):\n{}\n\n⚠️ Location unavailable: {}",
                ALERT_SENT_MARKER,
                self.recipients(),
                error.reason()
            ),
        }
    }
}
