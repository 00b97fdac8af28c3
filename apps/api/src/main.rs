mod assessment;
mod config;
mod errors;
mod llm_client;
mod master_list;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::analyst::LlmImpactAnalyst;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::master_list::MasterList;
use crate::routes::build_router;
use crate::state::AppState;

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

    info!("Starting Impact API v{}", env!("CARGO_PKG_VERSION"));

    // Load the master document list — absence is fatal
    let master_list = Arc::new(MasterList::load(&config.master_list_path)?);

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let analyst = Arc::new(LlmImpactAnalyst::new(llm));

    // Build app state
    let state = AppState {
        analyst,
        master_list,
    };

    let cors = build_cors_layer(&config.allowed_origin)?;

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer: exactly one allowed origin, or fully permissive
/// when configured as "*".
fn build_cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    if allowed_origin == "*" {
        return Ok(CorsLayer::permissive());
    }

    let origin: HeaderValue = allowed_origin
        .parse()
        .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid origin"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
