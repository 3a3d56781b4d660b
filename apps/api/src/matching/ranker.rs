//! Career ranker: scores every catalog entry, keeps the relevant ones, and explains them.
//!
//! Ranking is best-effort guidance: `rank_careers` never fails, it logs and
//! returns an empty list instead.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::matching::catalog::CareerCatalog;
use crate::matching::scorer::{token_matches, MatchScorer};
use crate::models::career::{CareerProfile, CareerSummary, DifficultyLevel, MatchResult};

/// Rounded scores must be strictly above this to be returned.
pub const RELEVANCE_FLOOR: f64 = 0.3;
pub const MAX_MATCHES: usize = 5;
pub const MAX_REASONS: usize = 3;

#[derive(Debug, Clone, Deserialize)]
pub struct MatchQuery {
    pub interests: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Accepted but not yet used for filtering or weighting.
    pub education_level: String,
    /// Accepted but not yet used for filtering or weighting.
    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,
}

/// Ranks the catalog against `query`: top 5 by score, each strictly above the floor.
///
/// Internal errors degrade to an empty list.
pub fn rank_careers(
    catalog: &CareerCatalog,
    scorer: &dyn MatchScorer,
    query: &MatchQuery,
) -> Vec<MatchResult> {
    match try_rank(catalog, scorer, query) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!(error = %e, scorer = scorer.backend(), "Career matching error");
            Vec::new()
        }
    }
}

/// Algorithm:
/// 1. Score every profile in catalog order
/// 2. Round to 2 decimals and keep scores > 0.3
/// 3. Stable-sort descending (catalog order breaks ties)
/// 4. Truncate to 5
pub fn try_rank(
    catalog: &CareerCatalog,
    scorer: &dyn MatchScorer,
    query: &MatchQuery,
) -> Result<Vec<MatchResult>, AppError> {
    let mut matches = Vec::new();

    for profile in catalog.iter() {
        let score = scorer.score(profile, &query.interests, &query.skills);
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(AppError::Internal(anyhow::anyhow!(
                "scorer '{}' produced {score} for '{}'",
                scorer.backend(),
                profile.id
            )));
        }

        // floor is checked on the reported (rounded) score
        let match_score = round_score(score);
        if match_score > RELEVANCE_FLOOR {
            matches.push(MatchResult {
                career_path: CareerSummary::from(profile),
                civilian_outcome: profile.civilian_translation.clone(),
                match_score,
                match_reasons: match_reasons(profile, &query.interests, &query.skills),
            });
        }
    }

    // sort_by is stable, so equal scores keep catalog order
    matches.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(MAX_MATCHES);

    tracing::debug!(
        candidates = catalog.len(),
        returned = matches.len(),
        "Careers ranked"
    );

    Ok(matches)
}

/// Human-readable reasons, in order: interests, skills, then a difficulty note. At most 3.
pub fn match_reasons(profile: &CareerProfile, interests: &[String], skills: &[String]) -> Vec<String> {
    let interest_reasons = interests
        .iter()
        .filter(|i| token_matches(profile, i))
        .map(|i| format!("Matches your interest in {i}"));

    let skill_reasons = skills
        .iter()
        .filter(|s| token_matches(profile, s))
        .map(|s| format!("Utilizes your {s} skills"));

    let difficulty_note = match profile.difficulty_level {
        DifficultyLevel::Easy => Some("Good entry-level opportunity".to_string()),
        DifficultyLevel::Challenging => Some("Offers growth and development challenges".to_string()),
        DifficultyLevel::Moderate => None,
    };

    interest_reasons
        .chain(skill_reasons)
        .chain(difficulty_note)
        .take(MAX_REASONS)
        .collect()
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
