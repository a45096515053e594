//! Rendering seam.
//!
//! The application never touches a concrete display. It renders through a
//! [`Surface`] and asks a [`Confirm`] before destructive actions, so the same
//! flows drive the terminal front-end and the test doubles.

mod loading;

pub use loading::{LoadingFlag, LoadingGuard};

use crate::app::Command;
use crate::status::StatusView;

/// Text of the row shown when the store holds no contacts.
pub const NO_CONTACTS: &str = "No contacts added yet.";

/// One row of the rendered contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    /// A stored contact with its delete affordance
    Contact {
        /// `name - phone`
        label: String,
        /// Accessible label of the delete affordance
        delete_label: String,
        /// Command captured at render time, dispatched when delete is chosen
        on_delete: Command,
    },

    /// The single "no contacts" row
    Placeholder(String),
}

impl ListRow {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

/// Display substrate for the contact list, status region and form.
pub trait Surface: Send + Sync {
    /// Replace the rendered contact list.
    fn render_contacts(&self, rows: &[ListRow]);

    /// Replace the status region. An empty message clears it.
    fn render_status(&self, status: &StatusView);

    /// Disable (`true`) or re-enable (`false`) the input affordances.
    fn set_loading(&self, loading: bool);

    /// Clear the name and phone fields.
    fn reset_form(&self);
}

/// Blocking yes/no question put to the user.
///
/// Called from inside async flows; implementations that wait on a person must
/// not stall the runtime worker (see `console::StdinConfirm`).
pub trait Confirm: Send + Sync {
    /// Returns `true` to proceed, `false` to cancel.
    fn confirm(&self, prompt: &str) -> bool;
}
