//! Data models.
//!
//! Contacts as exchanged with the remote store, and the alert message
//! composed from them.

pub mod alert;
pub mod contact;

pub use alert::AlertMessage;
pub use contact::{Contact, NewContact};
