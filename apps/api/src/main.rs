mod analysis;
mod config;
mod errors;
mod models;
mod routes;
mod state;
mod suggestions;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::WebhookSuggestionClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ResumeBuilder API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the suggestion backend (webhook client with local fallback)
    let suggestions = Arc::new(WebhookSuggestionClient::new(
        config.suggestions_webhook_url.clone(),
    ));
    match &config.suggestions_webhook_url {
        Some(url) => info!("Suggestion webhook configured: {url}"),
        None => info!("No suggestion webhook configured — running in offline mode"),
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        suggestions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
