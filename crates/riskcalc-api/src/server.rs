//! Server configuration and startup.

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::routes;
use crate::state::AppState;

/// OpenAPI description of the service.
#[derive(OpenApi)]
#[openapi(
    info(title = "Risk Assessment API", version = "1.2"),
    paths(
        routes::root::status,
        routes::health::health_check,
        routes::risk::assess,
        routes::risk::assess_preflight,
    ),
    tags(
        (name = "risk", description = "Allocation deviation assessment"),
        (name = "status", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Status
        .route("/", get(routes::root::status))
        .route("/health", get(routes::health::health_check))
        .route("/openapi.json", get(routes::root::openapi))
        // Risk
        .route(
            "/risk/assess",
            post(routes::risk::assess).options(routes::risk::assess_preflight),
        )
        // Middleware
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server.
pub async fn run_server(state: AppState) -> anyhow::Result<()> {
    let addr = state.config.bind_addr();
    let listener =
        tokio::net::TcpListener::bind((state.config.host.as_str(), state.config.port)).await?;
    let app = create_router(state);

    tracing::info!("RiskCalc API Server listening on http://{}", addr);
    tracing::info!("API endpoints:");
    tracing::info!("  GET     /");
    tracing::info!("  GET     /health");
    tracing::info!("  GET     /openapi.json");
    tracing::info!("  POST    /risk/assess");
    tracing::info!("  OPTIONS /risk/assess");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        return;
    }
    tracing::info!("Shutting down...");
}
