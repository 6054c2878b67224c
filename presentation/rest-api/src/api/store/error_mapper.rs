use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for StoreError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            StoreError::InvalidLocation => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "store.invalid_location",
            ),
        };

        (status, ErrorResponse::json(name, message))
    }
}
