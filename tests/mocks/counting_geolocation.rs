use amber_safe::error::{GeolocationError, GeolocationResult};
use amber_safe::geolocation::{Coordinates, GeolocationProvider, PositionOptions};
use async_trait::async_trait;
use std::sync::Mutex;

/// Geolocation provider with a fixed outcome that records each request.
#[allow(dead_code)]
pub struct CountingGeolocation {
    outcome: Result<Coordinates, GeolocationError>,
    requests: Mutex<Vec<PositionOptions>>,
}

#[allow(dead_code)]
impl CountingGeolocation {
    pub fn new(outcome: Result<Coordinates, GeolocationError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<PositionOptions> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeolocationProvider for CountingGeolocation {
    async fn current_position(&self, options: PositionOptions) -> GeolocationResult<Coordinates> {
        self.requests.lock().unwrap().push(options);
        self.outcome.clone()
    }
}
