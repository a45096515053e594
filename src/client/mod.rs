//! HTTP client for the remote contact store.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking` (see [`crate::repositories`]). The store is a plain
//! JSON collection: `GET <base>` lists, `POST <base>` creates and `DELETE <base>/<id>`
//! removes. Any non-success status is a failure; nothing is retried.

use crate::config::Config;
use crate::domain::ContactId;
use crate::error::{StoreAction, StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the contact store.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct ContactStoreClient {
    /// Contacts collection URL, without trailing slash
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl ContactStoreClient {
    /// Create a new ContactStoreClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::with_timeout(
            config.api_url.clone(),
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a ContactStoreClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(10))
    }

    /// Create a ContactStoreClient with a custom base URL and request timeout.
    #[doc(hidden)]
    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: Arc::new(agent),
        }
    }

    /// The contacts collection URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single contact.
    fn item_url(&self, id: &ContactId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    /// Map a ureq error to a StoreError.
    fn map_error(action: StoreAction, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(status, _) => StoreError::Status { action, status },
            ureq::Error::Transport(transport) => {
                let reason = if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    "Connection failed".to_string()
                } else if Self::is_timeout(&transport) {
                    "Request timeout".to_string()
                } else {
                    transport.to_string()
                };
                StoreError::Transport { action, reason }
            }
        }
    }

    /// Whether the transport error is the agent's read/write deadline expiring.
    fn is_timeout(transport: &ureq::Transport) -> bool {
        std::error::Error::source(transport)
            .and_then(|source| source.downcast_ref::<std::io::Error>())
            .is_some_and(|io| {
                matches!(
                    io.kind(),
                    std::io::ErrorKind::TimedOut | std::io::ErrorKind::WouldBlock
                )
            })
    }

    /// Log a failed call and pass the error through.
    fn log_failure(method: &str, url: &str, error: StoreError) -> StoreError {
        tracing::warn!("{} {} - Error: {}", method, url, error);
        error
    }

    /// Fetch every contact in the store.
    pub fn list_contacts(&self) -> StoreResult<Vec<Contact>> {
        let action = StoreAction::FetchContacts;
        let url = &self.base_url;
        tracing::debug!("GET {}", url);

        let response = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| Self::log_failure("GET", url, Self::map_error(action, e)))?;

        let body = response.into_string().map_err(|e| StoreError::Transport {
            action,
            reason: e.to_string(),
        })?;

        let contacts: Vec<Contact> = serde_json::from_str(&body)
            .map_err(|e| Self::log_failure("GET", url, StoreError::Decode(e)))?;

        tracing::debug!("GET {} - {} contacts", url, contacts.len());
        Ok(contacts)
    }

    /// Create a contact. The store assigns the id; the response body is ignored.
    pub fn create_contact(&self, contact: &NewContact) -> StoreResult<()> {
        let action = StoreAction::AddContact;
        let url = &self.base_url;
        tracing::debug!("POST {}", url);

        let response = self
            .agent
            .post(url)
            .set("Content-Type", "application/json")
            .send_json(contact)
            .map_err(|e| Self::log_failure("POST", url, Self::map_error(action, e)))?;

        tracing::debug!("POST {} - Success (status: {})", url, response.status());
        Ok(())
    }

    /// Delete the contact with `id`.
    pub fn delete_contact(&self, id: &ContactId) -> StoreResult<()> {
        let action = StoreAction::DeleteContact;
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);

        let response = self
            .agent
            .delete(&url)
            .call()
            .map_err(|e| Self::log_failure("DELETE", &url, Self::map_error(action, e)))?;

        tracing::debug!("DELETE {} - Success (status: {})", url, response.status());
        Ok(())
    }
}
