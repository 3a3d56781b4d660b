use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canned guidance for one interest category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationTemplate {
    #[serde(default)]
    pub next_questions: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<String>,
    #[serde(default)]
    pub learning_resources: Vec<String>,
}

impl RecommendationTemplate {
    pub fn is_empty(&self) -> bool {
        self.next_questions.is_empty()
            && self.action_items.is_empty()
            && self.learning_resources.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    CareerGuidance,
    ActionItems,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationContent {
    pub next_questions: Vec<String>,
    pub suggested_actions: Vec<String>,
    pub learning_resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendationResult {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub content: RecommendationContent,
    pub timestamp: DateTime<Utc>,
}
