use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::store::model::GeoPoint;
use business::domain::store::use_cases::recommend::{
    RecommendStoresParams, RecommendStoresUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::store::dto::{RecommendStoresRequest, StoreRecommendationResponse};
use crate::api::tags::ApiTags;

pub struct StoreApi {
    recommend_use_case: Arc<dyn RecommendStoresUseCase>,
}

impl StoreApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendStoresUseCase>) -> Self {
        Self { recommend_use_case }
    }
}

/// Store API
///
/// Ranks nearby stores for a shopping list.
#[OpenApi]
impl StoreApi {
    /// Recommend stores
    ///
    /// Prices the needed items at every store, measures the driving distance
    /// (great-circle when unavailable) and returns the best overall, cheapest
    /// and closest store together with the full ranking.
    #[oai(path = "/stores/recommend", method = "post", tag = "ApiTags::Stores")]
    async fn recommend(&self, body: Json<RecommendStoresRequest>) -> RecommendStoresResponse {
        let request = body.0;
        let params = RecommendStoresParams {
            origin: GeoPoint::new(request.lat, request.lng),
            gender: request.gender(),
            weight_kg: request.weight_kg,
            needed_items: request.needed_items,
        };

        match self.recommend_use_case.execute(params).await {
            Ok(ranking) => RecommendStoresResponse::Ok(Json(ranking.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RecommendStoresResponse::BadRequest(json),
                    _ => RecommendStoresResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendStoresResponse {
    #[oai(status = 200)]
    Ok(Json<StoreRecommendationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
