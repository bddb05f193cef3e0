//! Celestial HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin celestial-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CELESTIAL_CONFIG`: Path to the TOML config file (default: celestial.toml)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use celestial::config::AppConfig;
use celestial::engine::Engine;
use celestial::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    info!("starting celestial server");

    let config_path =
        env::var("CELESTIAL_CONFIG").unwrap_or_else(|_| "celestial.toml".to_string());
    let config = AppConfig::load_or_default(&config_path)?.with_env_overrides();

    // Built once, up front; handlers only ever share it read-only.
    let engine = Arc::new(Engine::new(config.search));
    info!(
        step_seconds = config.search.step_seconds,
        tolerance_seconds = config.search.tolerance_seconds,
        "engine initialized"
    );

    let app = create_router(AppState::new(engine));
    let addr = config.bind_address()?;
    info!("server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
