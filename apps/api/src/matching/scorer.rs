//! Match scoring: pluggable, trait-based scorer measuring how well a career profile
//! fits a user's stated interests and skills.
//!
//! Default: `KeywordMatchScorer` (bidirectional substring containment, deterministic).
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use crate::models::career::CareerProfile;

pub const INTEREST_WEIGHT: f64 = 0.7;
pub const SKILL_WEIGHT: f64 = 0.3;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the ranker or handlers.
/// Scores are expected in [0.0, 1.0]; the ranker rejects anything else.
pub trait MatchScorer: Send + Sync {
    fn score(&self, profile: &CareerProfile, interests: &[String], skills: &[String]) -> f64;

    /// Backend label for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm:
/// 1. A token matches when any profile keyword contains it or it contains a keyword
///    (case-insensitive).
/// 2. interest sub-score = matched interests / interests, skill sub-score likewise.
///    An empty list contributes nothing.
/// 3. score = 0.7 × interest + 0.3 × skill, capped at 1.0
pub struct KeywordMatchScorer;

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, profile: &CareerProfile, interests: &[String], skills: &[String]) -> f64 {
        let mut score = 0.0;
        if let Some(interest_score) = sub_score(profile, interests) {
            score += interest_score * INTEREST_WEIGHT;
        }
        if let Some(skill_score) = sub_score(profile, skills) {
            score += skill_score * SKILL_WEIGHT;
        }
        score.min(1.0)
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

/// Fraction of `tokens` matching the profile, or `None` for an empty list.
fn sub_score(profile: &CareerProfile, tokens: &[String]) -> Option<f64> {
    if tokens.is_empty() {
        return None;
    }
    let matched = tokens.iter().filter(|t| token_matches(profile, t)).count();
    Some((matched as f64 / tokens.len() as f64).min(1.0))
}

/// True when `token` and any of the profile's keywords contain one another.
pub fn token_matches(profile: &CareerProfile, token: &str) -> bool {
    let token = token.to_lowercase();
    profile.match_keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        keyword.contains(&token) || token.contains(&keyword)
    })
}
