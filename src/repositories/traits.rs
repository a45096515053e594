use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use async_trait::async_trait;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (remote store, in-memory mock). Nothing returned here is
/// kept by callers: after a mutation they call `list` again.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Create a new contact. The store assigns its id.
    async fn create(&self, contact: &NewContact) -> StoreResult<()>;

    /// Delete a contact.
    async fn delete(&self, id: &ContactId) -> StoreResult<()>;
}
