//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request (unknown risk profile).
    #[error("{0}")]
    BadRequest(String),

    /// Request body could not be parsed into the expected shape.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

// Conversions from domain errors
impl From<riskcalc_core::RiskError> for ApiError {
    fn from(err: riskcalc_core::RiskError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use riskcalc_core::RiskError;

    #[test]
    fn test_unknown_profile_maps_to_bad_request() {
        let err: ApiError = RiskError::unknown_profile("Aggressive").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Unknown profile: Aggressive");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::BadRequest("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::BadRequest("Unknown profile: X".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
