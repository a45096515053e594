//! Amber Safe - an emergency contact manager.
//!
//! This library keeps a list of emergency contacts in a remote HTTP store and
//! compiles them, together with the user's current position, into an alert.
//! The remote store is always authoritative: every mutation is followed by a
//! fresh fetch, and nothing is cached between actions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (contact ids, phone numbers)
//! - **models**: Contacts as stored remotely, and the composed alert
//! - **error**: Error types for the store, geolocation and configuration
//! - **config**: Configuration from environment variables
//! - **client**: Synchronous HTTP client for the contact store
//! - **repositories**: Async repository seam over the client
//! - **geolocation**: Position providers
//! - **status**: Status region with timed expiry
//! - **ui**: Rendering seam (`Surface`, `Confirm`) and the loading flag
//! - **app**: Command dispatch and the add, delete, refresh and alert flows
//! - **console**: Terminal implementation of the rendering seam

pub mod app;
pub mod client;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod geolocation;
pub mod models;
pub mod repositories;
pub mod status;
pub mod ui;

pub use app::{Command, ContactApp};
pub use client::ContactStoreClient;
pub use config::Config;
pub use error::{ConfigError, GeolocationError, StoreAction, StoreError};
pub use geolocation::{Coordinates, GeolocationProvider, PositionOptions};
pub use models::{AlertMessage, Contact, NewContact};
pub use status::{StatusNotifier, StatusView};
