mod check;
mod client;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, Provider};
use crate::llm_client::{ChatBackend, DeepSeekClient, GeminiClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting teammate-api v{}", env!("CARGO_PKG_VERSION"));

    // The credential is resolved per request, not at startup. A keyless
    // server still boots and serves the page; only the check calls fail.
    if config.api_key().is_none() {
        warn!(
            "no API key configured for {:?}; check requests will fail until one is set",
            config.provider
        );
    }

    let llm: Arc<dyn ChatBackend> = match config.provider {
        Provider::Gemini => Arc::new(GeminiClient::new(config.gemini_api_key.clone())),
        Provider::DeepSeek => Arc::new(DeepSeekClient::new(config.deepseek_api_key.clone())),
    };
    info!("LLM client initialized (provider: {:?})", config.provider);

    let state = AppState {
        llm,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
