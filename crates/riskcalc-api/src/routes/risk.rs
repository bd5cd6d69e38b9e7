//! Risk assessment endpoints.

use axum::{http::header, response::IntoResponse, Json};

use crate::dto::{AssessRequest, AssessResponse, PreflightResponse};
use crate::error::{ApiResult, ErrorResponse};
use crate::extract::JsonBody;

/// Methods advertised by the preflight handler.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Assess a portfolio allocation against a risk profile.
#[utoipa::path(
    post,
    path = "/risk/assess",
    tag = "risk",
    request_body = AssessRequest,
    responses(
        (status = 200, description = "Deviations of 5 percentage points or more", body = AssessResponse),
        (status = 400, description = "Unknown risk profile", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn assess(JsonBody(req): JsonBody<AssessRequest>) -> ApiResult<Json<AssessResponse>> {
    let profile = req.risk_profile.clone();
    let entries = req.allocation_entries();

    let assessment = riskcalc_core::assess(&profile, &entries).inspect_err(|e| {
        tracing::warn!(profile = %profile, "rejected assessment: {}", e);
    })?;

    tracing::debug!(
        profile = %profile,
        entries = entries.len(),
        deviations = assessment.deviations.len(),
        "assessed allocation"
    );

    Ok(Json(assessment.into()))
}

/// CORS preflight for the assessment endpoint.
#[utoipa::path(
    options,
    path = "/risk/assess",
    tag = "risk",
    responses((status = 200, description = "Allowed methods", body = PreflightResponse))
)]
pub async fn assess_preflight() -> impl IntoResponse {
    (
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
        ],
        Json(PreflightResponse {
            allow: "POST".to_string(),
        }),
    )
}
