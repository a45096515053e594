//! Network geolocation through a JSON lookup service.
//!
//! The lookup runs on the blocking pool with `ureq`, the same way the contact
//! store client does, and is bounded by the caller's timeout. The last fix is
//! remembered so repeated alerts within `maximum_age` skip the network.

use super::{Coordinates, GeolocationProvider, PositionOptions};
use crate::error::{GeolocationError, GeolocationResult};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Body returned by lookup services such as ip-api.com.
///
/// Accepts both `lat`/`lon` and `latitude`/`longitude` field names.
#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    status: Option<String>,

    #[serde(default)]
    message: Option<String>,

    #[serde(default, alias = "latitude")]
    lat: Option<f64>,

    #[serde(default, alias = "longitude")]
    lon: Option<f64>,
}

impl LookupResponse {
    fn into_coordinates(self) -> GeolocationResult<Coordinates> {
        if self.status.as_deref() == Some("fail") {
            let message = self
                .message
                .unwrap_or_else(|| "Location lookup failed".to_string());
            return Err(GeolocationError::PositionUnavailable(message));
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).ok_or_else(|| {
                GeolocationError::PositionUnavailable(format!(
                    "Location lookup returned invalid coordinates ({}, {})",
                    lat, lon
                ))
            }),
            _ => Err(GeolocationError::PositionUnavailable(
                "Location lookup returned no coordinates".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CachedFix {
    coordinates: Coordinates,
    taken_at: Instant,
}

/// Geolocation provider backed by an HTTP lookup endpoint.
pub struct IpGeolocationProvider {
    endpoint: String,
    agent: Arc<ureq::Agent>,
    last_fix: Mutex<Option<CachedFix>>,
}

impl IpGeolocationProvider {
    /// Create a provider for `endpoint`, with `request_timeout` bounding the
    /// underlying HTTP call.
    pub fn new(endpoint: impl Into<String>, request_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(request_timeout).build();

        Self {
            endpoint: endpoint.into(),
            agent: Arc::new(agent),
            last_fix: Mutex::new(None),
        }
    }

    /// Last fix, if it is younger than `maximum_age`.
    fn cached(&self, maximum_age: Duration) -> Option<Coordinates> {
        let last_fix = self.last_fix.lock().ok()?;
        (*last_fix)
            .filter(|fix| fix.taken_at.elapsed() < maximum_age)
            .map(|fix| fix.coordinates)
    }

    fn remember(&self, coordinates: Coordinates) {
        if let Ok(mut last_fix) = self.last_fix.lock() {
            *last_fix = Some(CachedFix {
                coordinates,
                taken_at: Instant::now(),
            });
        }
    }

    fn lookup(agent: &ureq::Agent, endpoint: &str) -> GeolocationResult<Coordinates> {
        tracing::debug!("GET {}", endpoint);

        let response = agent.get(endpoint).call().map_err(|e| match e {
            ureq::Error::Status(401 | 403, _) => GeolocationError::PermissionDenied(
                "Location lookup was refused".to_string(),
            ),
            ureq::Error::Status(code, _) => GeolocationError::PositionUnavailable(format!(
                "Location lookup failed (HTTP {})",
                code
            )),
            ureq::Error::Transport(transport) => {
                GeolocationError::PositionUnavailable(transport.to_string())
            }
        })?;

        let body: LookupResponse = response.into_json().map_err(|e| {
            GeolocationError::PositionUnavailable(format!("Unreadable location response: {}", e))
        })?;

        body.into_coordinates()
    }
}

#[async_trait]
impl GeolocationProvider for IpGeolocationProvider {
    async fn current_position(&self, options: PositionOptions) -> GeolocationResult<Coordinates> {
        if let Some(coordinates) = self.cached(options.maximum_age) {
            tracing::debug!("Reusing cached position {}", coordinates);
            return Ok(coordinates);
        }

        let agent = self.agent.clone();
        let endpoint = self.endpoint.clone();
        let lookup = tokio::task::spawn_blocking(move || Self::lookup(&agent, &endpoint));

        let coordinates = match tokio::time::timeout(options.timeout, lookup).await {
            Err(_) => {
                tracing::warn!("Position request timed out after {:?}", options.timeout);
                return Err(GeolocationError::Timeout);
            }
            Ok(Err(join_error)) => {
                return Err(GeolocationError::PositionUnavailable(format!(
                    "Location task failed: {}",
                    join_error
                )))
            }
            Ok(Ok(result)) => result?,
        };

        self.remember(coordinates);
        Ok(coordinates)
    }
}
