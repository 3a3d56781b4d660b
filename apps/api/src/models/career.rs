use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Challenging,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CivilianTranslation {
    pub job_titles: Vec<String>,
    pub average_salary: String,
    pub growth_outlook: String,
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromotionStep {
    pub rank: String,
    pub timeframe: String,
    pub pay_grade: String,
}

/// A military occupational path and its civilian-career translation.
/// Immutable once the catalog has been loaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerProfile {
    pub id: String,
    pub title: String,
    pub branch: String,
    pub service_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub training_duration: String,
    pub civilian_translation: CivilianTranslation,
    /// Internal matching data; never sent to clients.
    #[serde(skip_serializing)]
    pub match_keywords: Vec<String>,
    pub difficulty_level: DifficultyLevel,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub promotion_timeline: Vec<PromotionStep>,
}

/// Summary fields of a profile as shown alongside a match.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CareerSummary {
    pub id: String,
    pub title: String,
    pub branch: String,
    pub service_type: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub training_duration: String,
    pub difficulty_level: DifficultyLevel,
}

impl From<&CareerProfile> for CareerSummary {
    fn from(profile: &CareerProfile) -> Self {
        Self {
            id: profile.id.clone(),
            title: profile.title.clone(),
            branch: profile.branch.clone(),
            service_type: profile.service_type.clone(),
            description: profile.description.clone(),
            requirements: profile.requirements.clone(),
            training_duration: profile.training_duration.clone(),
            difficulty_level: profile.difficulty_level,
        }
    }
}

/// One ranked career match. Built fresh per ranking call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult {
    pub career_path: CareerSummary,
    pub civilian_outcome: CivilianTranslation,
    /// In [0.0, 1.0], rounded to 2 decimals.
    pub match_score: f64,
    /// At most 3 entries.
    pub match_reasons: Vec<String>,
}
