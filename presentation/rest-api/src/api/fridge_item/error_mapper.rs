use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::fridge_item::errors::FridgeItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for FridgeItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            FridgeItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "fridge_item.name_empty",
            ),
            FridgeItemError::UseWithinDaysNotPositive => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "fridge_item.use_within_days_not_positive",
            ),
            FridgeItemError::UseWithinDaysTooLarge => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "fridge_item.use_within_days_too_large",
            ),
            FridgeItemError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "fridge_item.not_found")
            }
            FridgeItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
