//! Common DTO types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Service status returned from the root endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

/// Payload returned for a CORS preflight on an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PreflightResponse {
    /// Methods accepted by the endpoint.
    pub allow: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Address the server was configured to listen on.
    pub address: String,
}
