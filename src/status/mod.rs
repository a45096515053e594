//! Status region.
//!
//! One message is visible at a time. Ordinary messages clear themselves after
//! [`STATUS_CLEAR_DELAY`]; a dispatched alert stays until replaced.

mod notifier;

pub use notifier::StatusNotifier;

use std::time::Duration;

/// Messages containing this marker never expire.
pub const ALERT_SENT_MARKER: &str = "Alert sent";

/// How long an ordinary message stays visible.
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_millis(5000);

/// Severity of a status message, rendered as a color cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn from_is_error(is_error: bool) -> Self {
        if is_error {
            Self::Error
        } else {
            Self::Success
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#388e3c",
            Self::Error => "#d32f2f",
        }
    }
}

/// What the status region currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub message: String,
    pub severity: Severity,
    /// Announce assertively to assistive technology
    pub assertive: bool,
}

impl StatusView {
    pub fn new(message: impl Into<String>, is_error: bool) -> Self {
        Self {
            message: message.into(),
            severity: Severity::from_is_error(is_error),
            assertive: true,
        }
    }

    /// The empty status region.
    pub fn cleared() -> Self {
        Self::new(String::new(), false)
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn color(&self) -> &'static str {
        self.severity.color()
    }
}

/// Whether a message stays visible until replaced.
pub fn is_persistent(message: &str) -> bool {
    message.contains(ALERT_SENT_MARKER)
}
