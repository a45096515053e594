//! Application flows and command dispatch.
//!
//! Every user action is a [`Command`]. [`ContactApp::dispatch`] routes it to
//! its handler; each handler runs its network and geolocation steps strictly
//! in sequence and ends by turning any error into a status message.

mod alert;
mod contact_list;
pub mod debounce;
mod form;

pub use alert::{GETTING_LOCATION, NO_CONTACTS_FOR_ALERT};
pub use contact_list::{render_rows, CONTACT_DELETED};
pub use debounce::{Debouncer, REFRESH_DEBOUNCE};
pub use form::{CONTACT_ADDED, INVALID_INPUT};

use crate::domain::ContactId;
use crate::geolocation::{GeolocationProvider, PositionOptions};
use crate::repositories::ContactRepository;
use crate::status::StatusNotifier;
use crate::ui::{Confirm, LoadingFlag, Surface};
use std::sync::Arc;

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-fetch and re-render the contact list
    Refresh,

    /// Submit the add-contact form with raw field values
    SubmitContact { name: String, phone: String },

    /// Delete affordance of a rendered row; id and name captured at render time
    DeleteContact { id: ContactId, name: String },

    /// Compile contacts and location into an alert
    SendAlert,
}

/// Contact manager wiring the store, geolocation and rendering seams together.
pub struct ContactApp {
    contacts: Arc<dyn ContactRepository>,
    geolocation: Arc<dyn GeolocationProvider>,
    surface: Arc<dyn Surface>,
    confirm: Arc<dyn Confirm>,
    status: StatusNotifier,
    loading: LoadingFlag,
    position_options: PositionOptions,
    refresh_debouncer: Debouncer,
}

impl ContactApp {
    pub fn new(
        contacts: Arc<dyn ContactRepository>,
        geolocation: Arc<dyn GeolocationProvider>,
        surface: Arc<dyn Surface>,
        confirm: Arc<dyn Confirm>,
    ) -> Self {
        Self {
            contacts,
            geolocation,
            status: StatusNotifier::new(surface.clone()),
            loading: LoadingFlag::new(surface.clone()),
            surface,
            confirm,
            position_options: PositionOptions::default(),
            refresh_debouncer: Debouncer::new(REFRESH_DEBOUNCE),
        }
    }

    /// Override the bounds used for alert position requests.
    pub fn with_position_options(mut self, position_options: PositionOptions) -> Self {
        self.position_options = position_options;
        self
    }

    pub fn status(&self) -> &StatusNotifier {
        &self.status
    }

    /// Whether an action currently holds the loading flag.
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Run the handler for `command` to completion.
    pub async fn dispatch(&self, command: Command) {
        tracing::debug!(?command, "dispatch");

        match command {
            Command::Refresh => self.refresh().await,
            Command::SubmitContact { name, phone } => self.submit_contact(&name, &phone).await,
            Command::DeleteContact { id, name } => self.delete_contact(&id, &name).await,
            Command::SendAlert => self.send_alert().await,
        }
    }

    /// Coalesce refresh requests: the list is re-fetched once, 200 ms after
    /// the last request in a burst.
    pub fn request_refresh(self: &Arc<Self>) {
        let app = Arc::clone(self);
        self.refresh_debouncer.call(async move { app.refresh().await });
    }
}
