mod chat;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod recommendations;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::service::{ChatService, ReplyGenerator};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::catalog::CareerCatalog;
use crate::matching::scorer::KeywordMatchScorer;
use crate::recommendations::templates::TemplateTable;
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

    info!("Starting OpportunityAI API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog and templates are validated here; bad data stops startup
    let catalog = match &config.career_catalog_path {
        Some(path) => CareerCatalog::from_json_file(path)?,
        None => CareerCatalog::builtin(),
    };
    info!("Career catalog loaded ({} careers)", catalog.len());

    let templates = match &config.recommendation_templates_path {
        Some(path) => TemplateTable::from_json_file(path)?,
        None => TemplateTable::builtin(),
    };
    info!("Recommendation templates loaded ({} categories)", templates.len());

    // Initialize LLM client (optional)
    let generator: Option<Arc<dyn ReplyGenerator>> = match &config.llm_api_key {
        Some(key) => {
            let llm = LlmClient::new(
                key.clone(),
                config.llm_api_url.clone(),
                config.llm_model.clone(),
                config.llm_timeout,
            )?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(llm))
        }
        None => {
            warn!("LLM API key not configured - using fallback responses only");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        templates: Arc::new(templates),
        scorer: Arc::new(KeywordMatchScorer),
        chat: Arc::new(ChatService::new(generator, config.llm_timeout)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict allowed origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
