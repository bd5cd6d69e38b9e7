//! RiskCalc API Server binary.

use std::path::PathBuf;

use clap::Parser;
use riskcalc_api::{server::run_server, AppState, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Portfolio Risk Assessment REST API Server
#[derive(Parser, Debug)]
#[command(name = "riskcalc-api-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging, RUST_LOG takes precedence
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    tracing::info!("RiskCalc API Server v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            ServerConfig::from_file(path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServerConfig::default()
        }
    };
    let config = config.with_overrides(args.host, args.port);

    run_server(AppState::new(config)).await
}
