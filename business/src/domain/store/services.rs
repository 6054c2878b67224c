use async_trait::async_trait;

use super::model::GeoPoint;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DistanceError {
    #[error("distance.not_configured")]
    NotConfigured,
    #[error("distance.transport")]
    Transport,
    #[error("distance.status: {0}")]
    Status(String),
    #[error("distance.malformed_response")]
    Malformed,
}

/// Road distance between two points. Implementations must not retry:
/// callers fall back to great-circle distance on any error.
#[async_trait]
pub trait DistanceService: Send + Sync {
    async fn distance_km(
        &self,
        origin: GeoPoint,
        destination: GeoPoint,
    ) -> Result<f64, DistanceError>;
}
