use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::nutrition::errors::NutritionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for NutritionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        let (status, name) = match &self {
            NutritionError::MissingProfile
            | NutritionError::MissingIngredients
            | NutritionError::InvalidProfile(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            NutritionError::UnknownIngredient(_) => (StatusCode::BAD_REQUEST, "UnknownIngredient"),
            NutritionError::ProfileNotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            NutritionError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "RepositoryError"),
        };

        let message = match self {
            NutritionError::UnknownIngredient(ingredient) => format!("{}: {}", message, ingredient),
            NutritionError::InvalidProfile(err) => format!("{}: {}", message, err),
            _ => message,
        };

        (status, ErrorResponse::json(name, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::profile::errors::ProfileError;

    #[test]
    fn should_map_input_errors_to_bad_request() {
        let (status, json) = NutritionError::UnknownIngredient("Moon Cheese".to_string())
            .into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "nutrition.unknown_ingredient: Moon Cheese");

        let (status, json) =
            NutritionError::InvalidProfile(ProfileError::InvalidAge).into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "nutrition.invalid_profile: profile.invalid_age");
    }

    #[test]
    fn should_distinguish_not_found_from_store_failures() {
        let (status, _) = NutritionError::ProfileNotFound("u".to_string()).into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, json) =
            NutritionError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
