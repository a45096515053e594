//! Test doubles shared by the integration tests.

mod counting_geolocation;
mod mock_contact_repository;
mod recording_surface;
mod scripted_confirm;

#[allow(unused_imports)]
pub use counting_geolocation::CountingGeolocation;
#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use recording_surface::{RecordingSurface, SurfaceEvent};
#[allow(unused_imports)]
pub use scripted_confirm::ScriptedConfirm;

use amber_safe::error::GeolocationError;
use amber_safe::geolocation::Coordinates;
use amber_safe::ContactApp;
use std::sync::Arc;

/// A `ContactApp` wired to in-memory doubles, with handles to inspect them.
#[allow(dead_code)]
pub struct Harness {
    pub app: Arc<ContactApp>,
    pub repo: MockContactRepository,
    pub surface: Arc<RecordingSurface>,
    pub confirm: Arc<ScriptedConfirm>,
    pub geolocation: Arc<CountingGeolocation>,
}

#[allow(dead_code)]
impl Harness {
    /// Harness whose geolocation succeeds at (1.0, 2.0) and whose
    /// confirmations are accepted.
    pub fn new() -> Self {
        Self::with(Ok(Coordinates::new(1.0, 2.0).unwrap()), true)
    }

    pub fn with(location: Result<Coordinates, GeolocationError>, confirm: bool) -> Self {
        let repo = MockContactRepository::new();
        let surface = Arc::new(RecordingSurface::new());
        let confirm = Arc::new(ScriptedConfirm::new(confirm));
        let geolocation = Arc::new(CountingGeolocation::new(location));

        let app = ContactApp::new(
            Arc::new(repo.clone()),
            geolocation.clone(),
            surface.clone(),
            confirm.clone(),
        );

        Self {
            app: Arc::new(app),
            repo,
            surface,
            confirm,
            geolocation,
        }
    }
}
