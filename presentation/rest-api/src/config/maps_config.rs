use std::env;
use std::time::Duration;

use super::engine_config::{ConfigError, parse_var};

/// Configuration for Google Distance Matrix access.
pub struct MapsConfig {
    pub api_key: String,
    pub mode: String,
    pub timeout: Duration,
}

impl MapsConfig {
    /// Environment variables:
    /// - GOOGLE_MAPS_API_KEY: empty disables driving distances (default: "")
    /// - GOOGLE_MAPS_MODE: travel mode (default: "driving")
    /// - GOOGLE_MAPS_TIMEOUT_SECS: request timeout (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        let mode = env::var("GOOGLE_MAPS_MODE")
            .ok()
            .map(|m| m.trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "driving".to_string());
        let timeout_secs = parse_var::<u64>("GOOGLE_MAPS_TIMEOUT_SECS")?.unwrap_or(5);

        Ok(Self {
            api_key,
            mode,
            timeout: Duration::from_secs(timeout_secs.max(1)),
        })
    }
}
