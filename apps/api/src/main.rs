mod config;
mod db;
mod errors;
mod export;
mod extractors;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Export API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    match &config.public_origin {
        Some(origin) => info!("Public origin pinned to {origin}"),
        None => info!("Public origin derived from request headers"),
    }
    info!("Print trigger delay: {}ms", config.print_delay_ms);

    let state = AppState {
        store: Arc::new(PgResumeStore::new(db)),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the editor frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
