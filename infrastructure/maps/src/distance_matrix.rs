use async_trait::async_trait;
use serde::Deserialize;

use business::domain::store::model::GeoPoint;
use business::domain::store::services::{DistanceError, DistanceService};

use crate::client::GoogleMapsClient;

const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    distance: Option<DistanceValue>,
}

#[derive(Debug, Deserialize)]
struct DistanceValue {
    /// Meters.
    value: f64,
}

/// Reads the single origin/destination element of a Distance Matrix reply.
fn extract_distance_km(response: DistanceMatrixResponse) -> Result<f64, DistanceError> {
    if response.status != STATUS_OK {
        return Err(DistanceError::Status(response.status));
    }

    let element = response
        .rows
        .into_iter()
        .next()
        .and_then(|row| row.elements.into_iter().next())
        .ok_or(DistanceError::Malformed)?;

    if element.status != STATUS_OK {
        return Err(DistanceError::Status(element.status));
    }

    let meters = element.distance.ok_or(DistanceError::Malformed)?.value;
    if !meters.is_finite() || meters < 0.0 {
        return Err(DistanceError::Malformed);
    }

    Ok(meters / 1000.0)
}

fn format_point(point: GeoPoint) -> String {
    format!("{},{}", point.lat, point.lng)
}

pub struct DistanceMatrixService {
    client: GoogleMapsClient,
}

impl DistanceMatrixService {
    pub fn new(client: GoogleMapsClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DistanceService for DistanceMatrixService {
    async fn distance_km(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<f64, DistanceError> {
        if !self.client.is_configured() {
            return Err(DistanceError::NotConfigured);
        }

        let response = self
            .client
            .client
            .get(self.client.distance_matrix_url())
            .query(&[
                ("origins", format_point(origin)),
                ("destinations", format_point(destination)),
                ("mode", self.client.mode.clone()),
                ("key", self.client.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("Distance Matrix request failed: {}", err.without_url());
                DistanceError::Transport
            })?;

        if !response.status().is_success() {
            tracing::warn!("Distance Matrix returned HTTP {}", response.status());
            return Err(DistanceError::Transport);
        }

        let body = response
            .json::<DistanceMatrixResponse>()
            .await
            .map_err(|_| DistanceError::Malformed)?;

        extract_distance_km(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(raw: &str) -> Result<f64, DistanceError> {
        let response: DistanceMatrixResponse = serde_json::from_str(raw).unwrap();
        extract_distance_km(response)
    }

    #[test]
    fn should_convert_meters_to_kilometers() {
        let raw = r#"{
            "status": "OK",
            "origin_addresses": ["A"],
            "destination_addresses": ["B"],
            "rows": [{"elements": [{
                "status": "OK",
                "distance": {"text": "3.4 km", "value": 3412},
                "duration": {"text": "9 mins", "value": 540}
            }]}]
        }"#;

        assert_eq!(parse(raw), Ok(3.412));
    }

    #[test]
    fn should_reject_non_ok_top_level_status() {
        let raw = r#"{"status": "REQUEST_DENIED", "rows": []}"#;
        assert_eq!(parse(raw), Err(DistanceError::Status("REQUEST_DENIED".to_string())));
    }

    #[test]
    fn should_reject_non_ok_element_status() {
        let raw = r#"{"status": "OK", "rows": [{"elements": [{"status": "ZERO_RESULTS"}]}]}"#;
        assert_eq!(parse(raw), Err(DistanceError::Status("ZERO_RESULTS".to_string())));
    }

    #[test]
    fn should_reject_missing_elements() {
        assert_eq!(parse(r#"{"status": "OK", "rows": []}"#), Err(DistanceError::Malformed));
        assert_eq!(
            parse(r#"{"status": "OK", "rows": [{"elements": [{"status": "OK"}]}]}"#),
            Err(DistanceError::Malformed)
        );
    }

    #[test]
    fn should_format_coordinates_as_lat_lng() {
        assert_eq!(format_point(GeoPoint::new(40.5, -3.25)), "40.5,-3.25");
    }

    #[tokio::test]
    async fn should_not_call_remote_without_api_key() {
        let client =
            GoogleMapsClient::new(String::new(), "driving".to_string(), Duration::from_secs(1))
                .unwrap();
        let service = DistanceMatrixService::new(client);

        let result = service
            .distance_km(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0))
            .await;
        assert_eq!(result, Err(DistanceError::NotConfigured));
    }
}
