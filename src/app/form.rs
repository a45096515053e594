//! Add-contact form handling.

use super::ContactApp;
use crate::models::NewContact;

/// Shown when the name is blank or the phone is not in international format.
pub const INVALID_INPUT: &str = "Please enter a valid name and phone number (e.g., +1234567890)";

pub const CONTACT_ADDED: &str = "Contact added successfully!";

impl ContactApp {
    /// Validate the form fields and create the contact.
    ///
    /// Invalid input is reported without touching the network. On success the
    /// form is cleared and the list re-fetched from the store.
    pub async fn submit_contact(&self, name: &str, phone: &str) {
        let new_contact = match NewContact::new(name, phone) {
            Ok(new_contact) => new_contact,
            Err(e) => {
                tracing::debug!("Rejected form input: {}", e);
                self.status.report(INVALID_INPUT, true);
                return;
            }
        };

        let _loading = self.loading.hold();

        match self.contacts.create(&new_contact).await {
            Ok(()) => {
                tracing::info!("Added contact {}", new_contact.name);
                self.surface.reset_form();
                self.refresh().await;
                self.status.report(CONTACT_ADDED, false);
            }
            Err(e) => {
                self.status.report(format!("Error adding contact: {}", e), true);
            }
        }
    }
}
