use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Shared Google Maps HTTP client configuration.
pub struct GoogleMapsClient {
    pub client: Client,
    pub api_key: String,
    pub mode: String,
    pub base_url: String,
}

impl GoogleMapsClient {
    /// Builds the HTTP client. Every request is bounded by `timeout`.
    pub fn new(api_key: String, mode: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            mode,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// An empty key disables remote lookups entirely.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Returns the Distance Matrix endpoint URL.
    pub fn distance_matrix_url(&self) -> String {
        format!("{}/distancematrix/json", self.base_url)
    }
}
