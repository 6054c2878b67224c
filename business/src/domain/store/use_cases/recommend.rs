use async_trait::async_trait;

use crate::domain::profile::value_objects::Gender;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{GeoPoint, StoreRanking};

pub struct RecommendStoresParams {
    pub origin: GeoPoint,
    pub needed_items: Vec<String>,
    /// Only used for the walking estimate.
    pub gender: Option<Gender>,
    pub weight_kg: Option<f64>,
}

#[async_trait]
pub trait RecommendStoresUseCase: Send + Sync {
    async fn execute(&self, params: RecommendStoresParams) -> Result<StoreRanking, StoreError>;
}
