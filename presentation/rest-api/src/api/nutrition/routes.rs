use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::nutrition::errors::NutritionError;
use business::domain::nutrition::use_cases::analyze::{
    AnalyzeNutritionParams, AnalyzeNutritionUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::nutrition::dto::{AnalyzeNutritionRequest, NutritionAnalysisResponse};
use crate::api::tags::ApiTags;

pub struct NutritionApi {
    analyze_use_case: Arc<dyn AnalyzeNutritionUseCase>,
}

impl NutritionApi {
    pub fn new(analyze_use_case: Arc<dyn AnalyzeNutritionUseCase>) -> Self {
        Self { analyze_use_case }
    }
}

/// Nutrition API
///
/// Nutrition targets, gap detection and shopping suggestions.
#[OpenApi]
impl NutritionApi {
    /// Analyze a profile against an ingredient inventory
    ///
    /// Computes calorie and macro targets, detects food-group gaps among the
    /// non-expired ingredients and proposes a de-duplicated shopping list.
    /// Provide either an inline `user_profile` or the `user_id` of a stored one.
    #[oai(path = "/nutrition/analyze", method = "post", tag = "ApiTags::Nutrition")]
    async fn analyze(&self, body: Json<AnalyzeNutritionRequest>) -> AnalyzeNutritionResponse {
        let request = body.0;

        let user_profile = match request.user_profile.map(|p| p.into_domain()).transpose() {
            Ok(profile) => profile,
            Err(err) => {
                let (_, json) = NutritionError::from(err).into_error_response();
                return AnalyzeNutritionResponse::BadRequest(json);
            }
        };

        let params = AnalyzeNutritionParams {
            user_profile,
            user_id: request.user_id,
            ingredients: request
                .ingredients
                .map(|items| items.into_iter().map(|i| i.into()).collect()),
        };

        match self.analyze_use_case.execute(params).await {
            Ok(analysis) => AnalyzeNutritionResponse::Ok(Json(analysis.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AnalyzeNutritionResponse::BadRequest(json),
                    404 => AnalyzeNutritionResponse::NotFound(json),
                    _ => AnalyzeNutritionResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AnalyzeNutritionResponse {
    #[oai(status = 200)]
    Ok(Json<NutritionAnalysisResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
