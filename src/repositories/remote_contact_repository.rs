use crate::client::ContactStoreClient;
use crate::domain::ContactId;
use crate::error::{StoreAction, StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinError;

/// Contact repository backed by the remote contact store.
///
/// Uses `tokio::task::spawn_blocking` to run the synchronous HTTP client on
/// the blocking pool, so the runtime keeps driving timers while a request is
/// in flight.
#[derive(Clone)]
pub struct RemoteContactRepository {
    client: Arc<ContactStoreClient>,
}

impl RemoteContactRepository {
    /// Create a new RemoteContactRepository with the given client.
    pub fn new(client: ContactStoreClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    fn join_error(action: StoreAction, error: JoinError) -> StoreError {
        StoreError::Transport {
            action,
            reason: format!("Task join error: {}", error),
        }
    }
}

#[async_trait]
impl ContactRepository for RemoteContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_contacts())
            .await
            .map_err(|e| Self::join_error(StoreAction::FetchContacts, e))?
    }

    async fn create(&self, contact: &NewContact) -> StoreResult<()> {
        let client = self.client.clone();
        let contact = contact.clone();

        tokio::task::spawn_blocking(move || client.create_contact(&contact))
            .await
            .map_err(|e| Self::join_error(StoreAction::AddContact, e))?
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        let client = self.client.clone();
        let id = id.clone();

        tokio::task::spawn_blocking(move || client.delete_contact(&id))
            .await
            .map_err(|e| Self::join_error(StoreAction::DeleteContact, e))?
    }
}
