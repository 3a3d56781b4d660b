//! Recommendation templates keyed by interest category, plus the fixed
//! general / next-steps / fallback guidance that is not keyed by category.

use std::collections::HashMap;
use std::path::Path;

use crate::errors::DataError;
use crate::models::recommendation::{RecommendationContent, RecommendationTemplate};

#[derive(Debug, Clone)]
pub struct TemplateTable {
    pub(crate) entries: HashMap<String, RecommendationTemplate>,
}

impl TemplateTable {
    /// Rejects blank category keys and templates with no content at all.
    pub fn new(entries: HashMap<String, RecommendationTemplate>) -> Result<Self, DataError> {
        for (category, template) in &entries {
            if category.trim().is_empty() {
                return Err(DataError::BlankCategory);
            }
            if template.is_empty() {
                return Err(DataError::EmptyTemplate(category.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Loads a JSON object of `category -> template` from disk.
    pub fn from_json_file(path: &Path) -> Result<Self, DataError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = serde_json::from_str(&raw).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(entries)
    }

    pub fn builtin() -> Self {
        let entries = [
            (
                "technology",
                [
                    "Are you more interested in cybersecurity or general IT support?",
                    "Do you prefer working with networks, programming, or hardware?",
                    "Have you worked with any specific technologies or programming languages?",
                ],
                [
                    "Explore cybersecurity specialist roles",
                    "Look into Signal/IT specialist positions",
                    "Consider Air Force or Space Force for tech opportunities",
                ],
                [
                    "Learn about CompTIA Security+ certification",
                    "Research military cybersecurity training programs",
                    "Check out basic networking and programming courses",
                ],
            ),
            (
                "aviation",
                [
                    "Are you interested in being a pilot or working on aircraft maintenance?",
                    "Do you prefer fixed-wing aircraft or helicopters?",
                    "Are you comfortable with heights and mechanical work?",
                ],
                [
                    "Research pilot training requirements",
                    "Explore aircraft maintenance careers",
                    "Look into Air Traffic Control opportunities",
                ],
                [
                    "Learn about different types of military aircraft",
                    "Research civilian aviation career paths",
                    "Study basic aerodynamics and aircraft systems",
                ],
            ),
            (
                "medical",
                [
                    "Are you interested in direct patient care or medical support roles?",
                    "Do you prefer emergency medicine or specialized care?",
                    "Are you planning to pursue medical school in the future?",
                ],
                [
                    "Explore combat medic training",
                    "Research medical laboratory specialist roles",
                    "Look into dental or veterinary technician positions",
                ],
                [
                    "Get EMT or First Aid certification",
                    "Research military medical training programs",
                    "Study basic anatomy and medical terminology",
                ],
            ),
            (
                "leadership",
                [
                    "Do you prefer leading small teams or large organizations?",
                    "Are you interested in operational leadership or administrative roles?",
                    "Do you have any previous leadership experience?",
                ],
                [
                    "Consider Officer Candidate School",
                    "Explore Non-Commissioned Officer paths",
                    "Research leadership development programs",
                ],
                [
                    "Study military leadership principles",
                    "Learn about different officer career paths",
                    "Practice communication and team management skills",
                ],
            ),
            (
                "mechanics",
                [
                    "Do you prefer working on vehicles, aircraft, or ships?",
                    "Are you interested in electronics or purely mechanical systems?",
                    "Do you enjoy troubleshooting and problem-solving?",
                ],
                [
                    "Explore automotive maintenance roles",
                    "Research aircraft or ship maintenance careers",
                    "Look into electronics repair specialties",
                ],
                [
                    "Learn basic automotive or mechanical skills",
                    "Study electronics and electrical systems",
                    "Research ASE or other industry certifications",
                ],
            ),
        ]
        .into_iter()
        .map(|(category, questions, actions, resources)| {
            (
                category.to_string(),
                RecommendationTemplate {
                    next_questions: strings(&questions),
                    action_items: strings(&actions),
                    learning_resources: strings(&resources),
                },
            )
        })
        .collect();

        Self { entries }
    }

    pub fn get(&self, category: &str) -> Option<&RecommendationTemplate> {
        self.entries.get(category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Display name for a category key: first letter of each word upper-cased, rest lowered.
pub fn display_category(category: &str) -> String {
    let mut out = String::with_capacity(category.len());
    let mut at_word_start = true;
    for c in category.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Fixed guidance
// ────────────────────────────────────────────────────────────────────────────

pub const GENERAL_CATEGORY: &str = "General Exploration";
pub const NEXT_STEPS_CATEGORY: &str = "Next Steps";
pub const FALLBACK_CATEGORY: &str = "Getting Started";

/// Used when none of the requested categories has a template.
pub fn general_content() -> RecommendationContent {
    RecommendationContent {
        next_questions: strings(&[
            "What activities do you enjoy in your free time?",
            "Do you prefer working with people, technology, or hands-on tasks?",
        ]),
        suggested_actions: strings(&[
            "Take a military career aptitude assessment",
            "Speak with recruiters from different branches",
            "Research the differences between Active Duty, Guard, and Reserves",
        ]),
        learning_resources: strings(&[
            "Explore military.com career exploration tools",
            "Watch day-in-the-life videos of different military jobs",
        ]),
    }
}

/// Appended after every category-specific result.
pub fn next_steps_content() -> RecommendationContent {
    RecommendationContent {
        next_questions: strings(&[
            "Would you like to see a 4-year career forecast for any of these paths?",
            "Are you interested in part-time service (Guard/Reserves) or full-time?",
        ]),
        suggested_actions: strings(&[
            "Save interesting career paths for later review",
            "Connect with current service members in your areas of interest",
            "Research education benefits and how they work",
        ]),
        learning_resources: strings(&[
            "Learn about military education benefits (GI Bill, tuition assistance)",
            "Research how military experience translates to civilian careers",
        ]),
    }
}

/// Returned alone when recommendation selection fails.
pub fn fallback_content() -> RecommendationContent {
    RecommendationContent {
        next_questions: strings(&[
            "What are your main interests or hobbies?",
            "What kind of work environment do you prefer?",
        ]),
        suggested_actions: strings(&[
            "Explore different military career categories",
            "Consider your long-term career goals",
            "Think about what type of training appeals to you",
        ]),
        learning_resources: strings(&[
            "Research basic information about military service",
            "Learn about different service branches and their specialties",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_passes_validation() {
        let builtin = TemplateTable::builtin();
        let validated = TemplateTable::new(builtin.entries.clone()).unwrap();
        assert_eq!(validated.len(), 5);
        assert!(validated.get("technology").is_some());
        assert!(validated.get("engineering").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = TemplateTable::builtin();
        assert!(table.get("Technology").is_none());
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut entries = HashMap::new();
        entries.insert(
            " ".to_string(),
            RecommendationTemplate {
                next_questions: strings(&["q"]),
                action_items: vec![],
                learning_resources: vec![],
            },
        );
        assert!(matches!(TemplateTable::new(entries), Err(DataError::BlankCategory)));
    }

    #[test]
    fn test_empty_template_rejected() {
        let mut entries = HashMap::new();
        entries.insert(
            "travel".to_string(),
            RecommendationTemplate {
                next_questions: vec![],
                action_items: vec![],
                learning_resources: vec![],
            },
        );
        assert!(matches!(
            TemplateTable::new(entries),
            Err(DataError::EmptyTemplate(c)) if c == "travel"
        ));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"travel": {{"next_questions": ["Where would you like to be stationed?"]}}}}"#
        )
        .unwrap();
        let table = TemplateTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("travel").unwrap().next_questions.len(), 1);
    }

    #[test]
    fn test_display_category() {
        assert_eq!(display_category("technology"), "Technology");
        assert_eq!(display_category("air traffic"), "Air Traffic");
        assert_eq!(display_category("MEDICAL"), "Medical");
    }
}
