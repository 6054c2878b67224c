use async_trait::async_trait;

use crate::domain::ingredient::model::Ingredient;
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::model::NutritionAnalysis;
use crate::domain::profile::model::UserProfile;

/// Either an inline profile or a user id to load one from the profile
/// store. An inline profile wins when both are present.
pub struct AnalyzeNutritionParams {
    pub user_profile: Option<UserProfile>,
    pub user_id: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
}

#[async_trait]
pub trait AnalyzeNutritionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AnalyzeNutritionParams,
    ) -> Result<NutritionAnalysis, NutritionError>;
}
