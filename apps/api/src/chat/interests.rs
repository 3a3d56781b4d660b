//! Keyword-based interest extraction from free-text chat messages.

/// Category keys and the lowercase phrases that signal them, in output order.
const INTEREST_CATEGORIES: &[(&str, &[&str])] = &[
    ("technology", &["computer", "tech", "cyber", "programming", "software"]),
    ("aviation", &["flying", "pilot", "aircraft", "aviation", "air force"]),
    ("medical", &["medical", "healthcare", "doctor", "nurse", "health"]),
    ("engineering", &["engineering", "mechanical", "electrical", "build"]),
    ("leadership", &["leadership", "manage", "lead", "supervisor"]),
    ("travel", &["travel", "different places", "world", "deploy"]),
    ("mechanics", &["mechanical", "fix", "repair", "maintenance"]),
    ("communications", &["communication", "radio", "signals", "network"]),
];

/// Phrases that make a message worth answering with recommendations.
const TRIGGER_PHRASES: &[&str] = &[
    "interested in",
    "like to",
    "career",
    "job",
    "work",
    "field",
    "aviation",
    "cyber",
    "technology",
    "medical",
    "engineering",
    "leadership",
    "travel",
    "benefits",
    "training",
];

/// Returns every category with at least one keyword appearing in `message`.
pub fn extract_interests(message: &str) -> Vec<String> {
    let message = message.to_lowercase();
    INTEREST_CATEGORIES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| message.contains(k)))
        .map(|(category, _)| category.to_string())
        .collect()
}

pub fn should_trigger_recommendations(message: &str) -> bool {
    let message = message.to_lowercase();
    TRIGGER_PHRASES.iter().any(|p| message.contains(p))
}
