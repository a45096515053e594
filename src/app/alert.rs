//! Alert composition.

use super::ContactApp;
use crate::models::AlertMessage;

pub const NO_CONTACTS_FOR_ALERT: &str = "Please add at least one contact first.";

pub const GETTING_LOCATION: &str = "Getting location...";

impl ContactApp {
    /// Compile the stored contacts and the current position into an alert.
    ///
    /// No position is requested when the store holds no contacts. A failed
    /// position request still produces the alert, marked as an error.
    pub async fn send_alert(&self) {
        let _loading = self.loading.hold();

        let contacts = match self.contacts.list().await {
            Ok(contacts) => contacts,
            Err(e) => {
                self.status.report(format!("Error sending alert: {}", e), true);
                return;
            }
        };

        if contacts.is_empty() {
            self.status.report(NO_CONTACTS_FOR_ALERT, true);
            return;
        }

        self.status.report(GETTING_LOCATION, false);

        let location = self
            .geolocation
            .current_position(self.position_options)
            .await;

        if let Err(e) = &location {
            tracing::warn!("Sending alert without location: {}", e);
        }

        let alert = AlertMessage::new(contacts, location);
        tracing::info!(
            recipients = alert.contacts.len(),
            with_location = !alert.is_error(),
            "Alert composed"
        );
        self.status.report(alert.render(), alert.is_error());
    }
}
