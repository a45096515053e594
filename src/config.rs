//! Configuration management for Amber Safe.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present; every setting has a default, so an empty
//! environment yields a working configuration pointed at the public contact store.

use crate::error::{ConfigError, ConfigResult};
use crate::geolocation::{Coordinates, PositionOptions};
use std::env;
use std::time::Duration;

/// Contact collection used when `AMBER_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://amber-safe-backend.onrender.com/contacts";

/// Lookup service used when `GEOLOCATION_URL` is not set.
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json";

/// Configuration for Amber Safe.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Contacts collection URL (GET/POST here, DELETE at `<url>/<id>`)
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Position request timeout in milliseconds (default: 10000)
    pub geolocation_timeout_ms: u64,

    /// Maximum age of a reusable position fix in milliseconds (default: 60000)
    pub geolocation_max_age_ms: u64,

    /// JSON geolocation lookup endpoint
    pub geolocation_url: String,

    /// Fixed position; when set, no lookup service is used
    pub fixed_position: Option<Coordinates>,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AMBER_API_URL`: contacts collection URL
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `GEOLOCATION_TIMEOUT_MS`: position timeout (default: 10000)
    /// - `GEOLOCATION_MAX_AGE_MS`: reusable fix age (default: 60000)
    /// - `GEOLOCATION_URL`: lookup endpoint (default: ip-api.com)
    /// - `AMBER_LATITUDE` / `AMBER_LONGITUDE`: fixed position, both or neither
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let api_url = env::var("AMBER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::validate_url("AMBER_API_URL", &api_url)?;

        let geolocation_url =
            env::var("GEOLOCATION_URL").unwrap_or_else(|_| DEFAULT_GEOLOCATION_URL.to_string());
        Self::validate_url("GEOLOCATION_URL", &geolocation_url)?;

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let geolocation_timeout_ms = Self::parse_env_u64("GEOLOCATION_TIMEOUT_MS", 10_000)?;
        let geolocation_max_age_ms = Self::parse_env_u64("GEOLOCATION_MAX_AGE_MS", 60_000)?;
        let fixed_position = Self::parse_fixed_position()?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            api_url,
            request_timeout,
            geolocation_timeout_ms,
            geolocation_max_age_ms,
            geolocation_url,
            fixed_position,
            log_level,
        })
    }

    /// Bounds applied to every alert's position request.
    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            timeout: Duration::from_millis(self.geolocation_timeout_ms),
            maximum_age: Duration::from_millis(self.geolocation_max_age_ms),
        }
    }

    fn validate_url(var_name: &str, url: &str) -> ConfigResult<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }
        Ok(())
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional environment variable as f64.
    fn parse_env_f64(var_name: &str) -> ConfigResult<Option<f64>> {
        match env::var(var_name) {
            Ok(val) => val
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a number, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }

    fn parse_fixed_position() -> ConfigResult<Option<Coordinates>> {
        let latitude = Self::parse_env_f64("AMBER_LATITUDE")?;
        let longitude = Self::parse_env_f64("AMBER_LONGITUDE")?;

        match (latitude, longitude) {
            (None, None) => Ok(None),
            (Some(lat), Some(lon)) => Coordinates::new(lat, lon).map(Some).ok_or_else(|| {
                ConfigError::InvalidValue {
                    var: "AMBER_LATITUDE/AMBER_LONGITUDE".to_string(),
                    reason: "Latitude must be within ±90 and longitude within ±180".to_string(),
                }
            }),
            (Some(_), None) => Err(ConfigError::Incomplete {
                present: "AMBER_LATITUDE".to_string(),
                missing: "AMBER_LONGITUDE".to_string(),
            }),
            (None, Some(_)) => Err(ConfigError::Incomplete {
                present: "AMBER_LONGITUDE".to_string(),
                missing: "AMBER_LATITUDE".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: 10,
            geolocation_timeout_ms: 10_000,
            geolocation_max_age_ms: 60_000,
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            fixed_position: None,
            log_level: "warn".to_string(),
        }
    }
}
