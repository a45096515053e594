//! Error types for Amber Safe.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every error here ends its life as a status message at the boundary of the user
//! action that triggered it.

use std::fmt;
use thiserror::Error;

/// The contact store call that failed, used to phrase error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    FetchContacts,
    AddContact,
    DeleteContact,
}

impl fmt::Display for StoreAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Self::FetchContacts => "fetch contacts",
            Self::AddContact => "add contact",
            Self::DeleteContact => "delete contact",
        };
        write!(f, "{}", phrase)
    }
}

/// Errors that can occur when talking to the remote contact store.
///
/// `Status` and `Transport` are both transport failures: no distinction is made
/// between 4xx and 5xx, and nothing is retried.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store answered with a non-success status code
    #[error("Failed to {action} (HTTP {status})")]
    Status { action: StoreAction, status: u16 },

    /// The request never produced a response
    #[error("Failed to {action}: {reason}")]
    Transport { action: StoreAction, reason: String },

    /// The contact list body was not a JSON array of contacts
    #[error("Invalid contact list: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this is a transport failure rather than a decode failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::Transport { .. })
    }
}

/// Errors reported by a geolocation provider.
///
/// The variants follow the three failure codes browsers expose.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// The user or platform refused to share a position
    #[error("User denied geolocation: {0}")]
    PermissionDenied(String),

    /// No position could be determined
    #[error("{0}")]
    PositionUnavailable(String),

    /// No position was obtained within the requested timeout
    #[error("Timeout expired")]
    Timeout,
}

impl GeolocationError {
    /// Human-readable reason, as folded into a degraded alert.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Two variables must be set together
    #[error("{present} is set but {missing} is not")]
    Incomplete { present: String, missing: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with GeolocationError
pub type GeolocationResult<T> = Result<T, GeolocationError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
