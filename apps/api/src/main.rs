mod analysis;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
mod stats;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::projects::{FallbackProjectGenerator, LlmProjectGenerator, ProjectGenerator};
use crate::catalog::{RoleCatalog, SkillCatalog};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Aspyr API v{}", env!("CARGO_PKG_VERSION"));

    // Load the static catalogs (panics here are programmer errors in the
    // embedded data, caught at startup)
    let skills = Arc::new(SkillCatalog::load()?);
    let roles = Arc::new(RoleCatalog::load()?);
    info!("Catalogs loaded: {} skills, {} roles", skills.len(), roles.len());

    // Select the project generator: LLM-backed when a key is configured,
    // deterministic local fallback otherwise
    let projects: Arc<dyn ProjectGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            info!("Project generator: LLM (model: {})", llm_client::MODEL);
            Arc::new(LlmProjectGenerator(LlmClient::new(key.clone())))
        }
        None => {
            info!("Project generator: local fallback (ANTHROPIC_API_KEY not set)");
            Arc::new(FallbackProjectGenerator)
        }
    };

    let state = AppState {
        config: config.clone(),
        skills,
        roles,
        projects,
        http: reqwest::Client::new(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
