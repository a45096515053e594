mod remote_contact_repository;
mod traits;

pub use remote_contact_repository::RemoteContactRepository;
pub use traits::ContactRepository;
