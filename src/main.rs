//! Attendance calendar HTTP server.
//!
//! Environment:
//! - `ATTENDANCE_CONFIG_DIR`: configuration directory (default `./config/attendance`)
//! - `ATTENDANCE_ADDR`: listen address (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use std::env;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config_dir =
        env::var("ATTENDANCE_CONFIG_DIR").unwrap_or_else(|_| "./config/attendance".to_string());
    let addr = env::var("ATTENDANCE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, config_dir = %config_dir, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        config_dir = %config_dir,
        branches = config.config().branches().len(),
        "Configuration loaded"
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(error = %err, addr = %addr, "Failed to bind");
            std::process::exit(1);
        }
    };
    info!(addr = %addr, "Server starting...");

    if let Err(err) = axum::serve(listener, create_router(AppState::new(config))).await {
        error!(error = %err, "Server stopped");
        std::process::exit(1);
    }
}
