//! RiskCalc REST API Server.
//!
//! This crate exposes the RiskCalc deviation assessment over HTTP.
//!
//! ## Endpoints
//!
//! - `POST /risk/assess` - Compare an allocation against a risk profile
//! - `OPTIONS /risk/assess` - CORS preflight
//! - `GET /` - Service status
//! - `GET /health` - Health check
//! - `GET /openapi.json` - OpenAPI document
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! riskcalc-api-server
//!
//! # Custom host and port
//! riskcalc-api-server --host 0.0.0.0 --port 3000
//!
//! # Load settings from a TOML file
//! riskcalc-api-server --config riskcalc.toml
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
