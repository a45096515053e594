//! Contact list rendering, refresh and deletion.

use super::{Command, ContactApp};
use crate::domain::ContactId;
use crate::models::Contact;
use crate::ui::{ListRow, NO_CONTACTS};

pub const CONTACT_DELETED: &str = "Contact deleted successfully!";

/// Rows for `contacts`: one per contact, or a single placeholder when empty.
pub fn render_rows(contacts: &[Contact]) -> Vec<ListRow> {
    if contacts.is_empty() {
        return vec![ListRow::Placeholder(NO_CONTACTS.to_string())];
    }

    contacts
        .iter()
        .map(|contact| ListRow::Contact {
            label: contact.list_label(),
            delete_label: format!("Delete contact {}", contact.name),
            on_delete: Command::DeleteContact {
                id: contact.id.clone(),
                name: contact.name.clone(),
            },
        })
        .collect()
}

impl ContactApp {
    /// Render `contacts` on the surface.
    pub fn display_contacts(&self, contacts: &[Contact]) {
        self.surface.render_contacts(&render_rows(contacts));
    }

    /// Re-fetch the list from the store and render it.
    pub async fn refresh(&self) {
        let _loading = self.loading.hold();

        match self.contacts.list().await {
            Ok(contacts) => self.display_contacts(&contacts),
            Err(e) => {
                self.status.report(format!("Error loading contacts: {}", e), true);
            }
        }
    }

    /// Delete a contact after the user confirms.
    ///
    /// Cancelling leaves everything untouched, including the status region.
    pub async fn delete_contact(&self, id: &ContactId, name: &str) {
        if !self
            .confirm
            .confirm(&format!("Are you sure you want to delete {}?", name))
        {
            tracing::debug!("Deletion of {} cancelled", id);
            return;
        }

        let _loading = self.loading.hold();

        match self.contacts.delete(id).await {
            Ok(()) => {
                tracing::info!("Deleted contact {}", id);
                self.refresh().await;
                self.status.report(CONTACT_DELETED, false);
            }
            Err(e) => {
                self.status.report(format!("Error deleting contact: {}", e), true);
            }
        }
    }
}
