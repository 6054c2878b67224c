use std::sync::Arc;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::timeout;

use crate::application::catalog::food::{CachedFoodCatalog, CachedSuggestionCatalog};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::nutrition::calculator::{
    bmr, calculate_food_group_targets, calculate_target, tdee,
};
use crate::domain::nutrition::errors::NutritionError;
use crate::domain::nutrition::gaps::{detect_gaps, validate_ingredients};
use crate::domain::nutrition::model::NutritionAnalysis;
use crate::domain::nutrition::recommendation::{generate_recommendations, generate_shopping_list};
use crate::domain::nutrition::use_cases::analyze::{
    AnalyzeNutritionParams, AnalyzeNutritionUseCase,
};
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::shared::value_objects::UserId;

pub struct AnalyzeNutritionUseCaseImpl {
    pub profile_repository: Arc<dyn ProfileRepository>,
    pub food_catalog: Arc<CachedFoodCatalog>,
    pub suggestion_catalog: Arc<CachedSuggestionCatalog>,
    pub logger: Arc<dyn Logger>,
    /// Reject ingredients missing from the food catalog.
    pub strict_validation: bool,
    pub profile_timeout: Duration,
}

enum ProfileSource {
    Inline(UserProfile),
    Stored(UserId),
}

impl AnalyzeNutritionUseCaseImpl {
    async fn load_profile(&self, source: ProfileSource) -> Result<UserProfile, NutritionError> {
        let user_id = match source {
            ProfileSource::Inline(profile) => return Ok(profile),
            ProfileSource::Stored(user_id) => user_id,
        };

        let record = timeout(
            self.profile_timeout,
            self.profile_repository.find_by_user_id(&user_id),
        )
        .await
        .map_err(RepositoryError::from)
        .and_then(|found| found)
        .map_err(|err| {
            self.logger
                .error(&format!("Profile lookup failed for user {}: {}", user_id, err));
            NutritionError::Repository(err)
        })?
        .ok_or_else(|| NutritionError::ProfileNotFound(user_id.to_string()))?;

        Ok(record.into_profile()?)
    }
}

#[async_trait]
impl AnalyzeNutritionUseCase for AnalyzeNutritionUseCaseImpl {
    async fn execute(
        &self,
        params: AnalyzeNutritionParams,
    ) -> Result<NutritionAnalysis, NutritionError> {
        let source = match (params.user_profile, params.user_id.as_deref().and_then(UserId::parse)) {
            (Some(profile), _) => ProfileSource::Inline(profile),
            (None, Some(user_id)) => ProfileSource::Stored(user_id),
            (None, None) => return Err(NutritionError::MissingProfile),
        };
        let ingredients = params.ingredients.ok_or(NutritionError::MissingIngredients)?;

        self.logger.info(&format!(
            "Analyzing nutrition for {} ingredients",
            ingredients.len()
        ));

        let catalog = self.food_catalog.snapshot().await;

        if self.strict_validation {
            if catalog.is_empty() {
                self.logger
                    .warn("Food catalog is empty, skipping strict ingredient validation");
            } else {
                validate_ingredients(&ingredients, &catalog)?;
            }
        }

        let profile = self.load_profile(source).await?;
        let today = Utc::now().date_naive();

        self.logger.debug(&format!(
            "BMR {:.2} kcal, TDEE {:.2} kcal",
            bmr(&profile),
            tdee(&profile)
        ));

        let nutrition_target = calculate_target(&profile);
        let food_group_targets = calculate_food_group_targets(&profile);
        let gaps = detect_gaps(&profile, &ingredients, &catalog, today);
        let recommendations = generate_recommendations(&ingredients, &gaps, today);

        let suggestions = self.suggestion_catalog.snapshot().await;
        let shopping_list =
            generate_shopping_list(&profile.diet_type, &gaps, &suggestions, &catalog);

        self.logger.info(&format!(
            "Detected {} gaps, suggesting {} items",
            gaps.len(),
            shopping_list.len()
        ));

        Ok(NutritionAnalysis {
            nutrition_target,
            food_group_targets,
            gaps,
            recommendations,
            shopping_list,
        })
    }
}
