//! Root status and API documentation endpoints.

use axum::Json;
use utoipa::OpenApi;

use crate::dto::StatusResponse;
use crate::server::ApiDoc;

/// Endpoints advertised by the status payload.
pub const ADVERTISED_ENDPOINTS: &[&str] = &["/risk/assess"];

/// Service status.
#[utoipa::path(
    get,
    path = "/",
    tag = "status",
    responses((status = 200, description = "Service is running", body = StatusResponse))
)]
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "DBS RiskCalc API is running".to_string(),
        endpoints: ADVERTISED_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    })
}

/// OpenAPI document for the service.
pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
