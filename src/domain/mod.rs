//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a user types into
//! the contact form and the ids handed out by the contact store. These value
//! objects validate at construction time so malformed input never reaches
//! the network.

pub mod contact_id;
pub mod errors;
pub mod phone;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
