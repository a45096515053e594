//! Geolocation providers.
//!
//! A provider answers one request for the current position with exactly one
//! outcome: coordinates or a [`GeolocationError`]. Nothing is retried.

mod ip_lookup;

pub use ip_lookup::IpGeolocationProvider;

use crate::error::GeolocationResult;
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

/// Default time allowed for a position request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default age under which a previously obtained fix may be reused.
pub const DEFAULT_MAXIMUM_AGE: Duration = Duration::from_millis(60_000);

/// Bounds for a single position request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    /// How long the request may take before failing with `Timeout`
    pub timeout: Duration,

    /// How old a cached fix may be and still be returned
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        valid.then_some(Self {
            latitude,
            longitude,
        })
    }

    /// Link to this position on Google Maps.
    pub fn map_link(&self) -> String {
        format!("https://www.google.com/maps?q={}", self)
    }
}

/// Prints whole degrees with a trailing `.0` so `1` renders as `1.0`.
fn format_degrees(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{}",
            format_degrees(self.latitude),
            format_degrees(self.longitude)
        )
    }
}

/// Source of the user's current position.
#[async_trait]
pub trait GeolocationProvider: Send + Sync {
    /// Request the current position once.
    async fn current_position(&self, options: PositionOptions) -> GeolocationResult<Coordinates>;
}

/// Provider that always reports the same, configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocationProvider {
    coordinates: Coordinates,
}

impl FixedGeolocationProvider {
    pub fn new(coordinates: Coordinates) -> Self {
        Self { coordinates }
    }
}

#[async_trait]
impl GeolocationProvider for FixedGeolocationProvider {
    async fn current_position(&self, _options: PositionOptions) -> GeolocationResult<Coordinates> {
        Ok(self.coordinates)
    }
}
