//! Health check endpoints.

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        address: state.config.bind_addr(),
    })
}
