use crate::domain::errors::RepositoryError;
use crate::domain::profile::errors::ProfileError;

#[derive(Debug, thiserror::Error)]
pub enum NutritionError {
    #[error("nutrition.missing_profile")]
    MissingProfile,
    #[error("nutrition.missing_ingredients")]
    MissingIngredients,
    #[error("nutrition.unknown_ingredient")]
    UnknownIngredient(String),
    #[error("nutrition.profile_not_found")]
    ProfileNotFound(String),
    #[error("nutrition.invalid_profile")]
    InvalidProfile(#[from] ProfileError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
