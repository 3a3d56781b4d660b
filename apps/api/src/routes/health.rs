use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "OpportunityAI engine is running",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now()
    }))
}

/// GET /health
/// Reports which chat backend is active; matching and recommendations are always local.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let chat_service = if state.chat.llm_enabled() {
        json!({ "status": "active", "backend": "llm", "model": state.config.llm_model })
    } else {
        json!({ "status": "active", "backend": "fallback" })
    };

    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "chat_service": chat_service,
            "career_matcher": {
                "status": "active",
                "backend": state.scorer.backend(),
                "careers": state.catalog.len()
            },
            "recommendation_engine": {
                "status": "active",
                "categories": state.templates.len()
            }
        },
        "timestamp": Utc::now()
    }))
}
