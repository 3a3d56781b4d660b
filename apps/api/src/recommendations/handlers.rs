use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::recommendation::RecommendationResult;
use crate::recommendations::selector::recommend;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub interests: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<RecommendationResult>,
    pub total: usize,
    pub timestamp: DateTime<Utc>,
}

/// POST /api/v1/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Json<RecommendationResponse> {
    tracing::info!(interests = ?request.interests, "Generating recommendations");

    let recommendations = recommend(&state.templates, &request.interests);

    Json(RecommendationResponse {
        total: recommendations.len(),
        recommendations,
        timestamp: Utc::now(),
    })
}
