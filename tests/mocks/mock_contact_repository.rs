use amber_safe::domain::ContactId;
use amber_safe::error::{StoreAction, StoreError, StoreResult};
use amber_safe::models::{Contact, NewContact};
use amber_safe::repositories::ContactRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that assigns ids
/// like a real store, tracks method calls for verification, and can be told
/// to fail a method with a given HTTP status.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    next_id: Arc<Mutex<usize>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failures: Arc<Mutex<HashMap<String, u16>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stored contact and return its id.
    pub fn add_contact(&self, name: &str, phone: &str) -> ContactId {
        let id = self.assign_id();
        let mut contacts = self.contacts.lock().unwrap();
        contacts.push(Contact::new(id.clone(), name, phone));
        id
    }

    /// Snapshot of the stored contacts.
    pub fn contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make `method` ("list", "create" or "delete") fail with `status`.
    pub fn fail_with(&self, method: &str, status: u16) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(method.to_string(), status);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn assign_id(&self) -> ContactId {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        ContactId::new(format!("mock-{}", next_id)).unwrap()
    }

    fn track_call(&self, method: &str, action: StoreAction) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        match self.failures.lock().unwrap().get(method) {
            Some(&status) => Err(StoreError::Status { action, status }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list", StoreAction::FetchContacts)?;
        Ok(self.contacts())
    }

    async fn create(&self, contact: &NewContact) -> StoreResult<()> {
        self.track_call("create", StoreAction::AddContact)?;
        self.add_contact(&contact.name, contact.phone.as_str());
        Ok(())
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.track_call("delete", StoreAction::DeleteContact)?;

        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|contact| &contact.id != id);

        if contacts.len() == before {
            return Err(StoreError::Status {
                action: StoreAction::DeleteContact,
                status: 404,
            });
        }
        Ok(())
    }
}
