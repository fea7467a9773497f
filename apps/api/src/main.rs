mod config;
mod embedding;
mod errors;
mod models;
mod pathway;
mod reference;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::embedding::HttpEmbedder;
use crate::pathway::context::{PathwayContext, PathwayParams};
use crate::reference::ReferenceData;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathway API v{}", env!("CARGO_PKG_VERSION"));

    // Reference data is read from disk and the blocking HTTP client must not be built
    // on an async worker, so both happen on the blocking pool.
    let startup_config = config.clone();
    let (data, embedder) = tokio::task::spawn_blocking(move || -> Result<_> {
        let data = ReferenceData::load(&startup_config.data_dir)?;
        let embedder = HttpEmbedder::new(&startup_config)?;
        Ok((data, embedder))
    })
    .await
    .context("startup loader panicked")??;

    info!("Embedding client initialized (model: {})", embedder.model());

    let pathway = PathwayContext::new(data, Arc::new(embedder), PathwayParams::default());

    // Build app state
    let state = AppState {
        pathway: Arc::new(pathway),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
