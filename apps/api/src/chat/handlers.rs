use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::chat::interests::extract_interests;
use crate::chat::service::ChatMessage;
use crate::errors::AppError;
use crate::matching::ranker::{rank_careers, MatchQuery};
use crate::models::career::MatchResult;
use crate::models::recommendation::RecommendationResult;
use crate::recommendations::selector::recommend;
use crate::state::AppState;

/// Education level assumed when matching from a chat message.
const CHAT_EDUCATION_LEVEL: &str = "high_school";

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub recommendations: Vec<RecommendationResult>,
    pub career_paths: Vec<MatchResult>,
    pub confidence: f64,
}

/// POST /api/v1/chat
///
/// Replies to the message and, when the conversation calls for it, attaches
/// recommendations and career matches for the interests found in the message.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message is required".to_string()));
    }

    tracing::info!(
        message_len = request.message.len(),
        history_len = request.conversation_history.len(),
        "Processing chat request"
    );

    let reply = state
        .chat
        .process_message(&request.message, &request.conversation_history)
        .await;

    let mut recommendations = Vec::new();
    let mut career_paths = Vec::new();

    if reply.trigger_recommendations {
        let interests = extract_interests(&request.message);
        if !interests.is_empty() {
            recommendations = recommend(&state.templates, &interests);

            let query = MatchQuery {
                interests,
                skills: Vec::new(),
                education_level: CHAT_EDUCATION_LEVEL.to_string(),
                preferences: None,
            };
            career_paths = rank_careers(&state.catalog, state.scorer.as_ref(), &query);
        }
    }

    Ok(Json(ChatResponse {
        response: reply.response,
        recommendations,
        career_paths,
        confidence: reply.confidence,
    }))
}
