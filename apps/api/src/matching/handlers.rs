//! Axum route handlers for career matching and browsing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::forecast::{build_forecast, CareerForecast, ForecastRequest};
use crate::matching::ranker::{rank_careers, MatchQuery};
use crate::models::career::{CareerProfile, MatchResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CareerMatchResponse {
    pub matches: Vec<MatchResult>,
    pub total_matches: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CareerFilter {
    pub branch: Option<String>,
    pub service_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CareerListResponse {
    pub career_paths: Vec<CareerProfile>,
    pub total: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/career-match
///
/// Always succeeds; an empty `matches` list means nothing was relevant.
pub async fn handle_career_match(
    State(state): State<AppState>,
    Json(query): Json<MatchQuery>,
) -> Json<CareerMatchResponse> {
    tracing::info!(
        interests = ?query.interests,
        skill_count = query.skills.len(),
        education_level = %query.education_level,
        has_preferences = query.preferences.is_some(),
        "Processing career match request"
    );

    let matches = rank_careers(&state.catalog, state.scorer.as_ref(), &query);

    Json(CareerMatchResponse {
        total_matches: matches.len(),
        matches,
        timestamp: Utc::now(),
    })
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
    Query(filter): Query<CareerFilter>,
) -> Json<CareerListResponse> {
    let career_paths: Vec<CareerProfile> = state
        .catalog
        .filter(filter.branch.as_deref(), filter.service_type.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(CareerListResponse {
        total: career_paths.len(),
        career_paths,
    })
}

/// GET /api/v1/careers/:id
pub async fn handle_get_career(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CareerProfile>, AppError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career path {id} not found")))
}

/// POST /api/v1/careers/forecast
pub async fn handle_forecast(
    State(state): State<AppState>,
    Json(request): Json<ForecastRequest>,
) -> Result<Json<CareerForecast>, AppError> {
    let profile = state.catalog.get(&request.career_path_id).ok_or_else(|| {
        AppError::NotFound(format!("Career path {} not found", request.career_path_id))
    })?;

    let forecast = build_forecast(profile, request.service_years)?;
    Ok(Json(forecast))
}
