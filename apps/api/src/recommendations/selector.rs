//! Recommendation selector: turns recognised interest categories into a short,
//! prioritised list of guidance entries.
//!
//! Output order is a contract: category results first (input order), then the
//! fixed "Next Steps" entry, truncated to 3. With three or more recognised
//! categories the "Next Steps" entry is pushed out; that is intended.

use chrono::Utc;

use crate::errors::AppError;
use crate::models::recommendation::{
    Priority, RecommendationContent, RecommendationResult, RecommendationType,
};
use crate::recommendations::templates::{
    display_category, fallback_content, general_content, next_steps_content, TemplateTable,
    FALLBACK_CATEGORY, GENERAL_CATEGORY, NEXT_STEPS_CATEGORY,
};

pub const MAX_RECOMMENDATIONS: usize = 3;
const MAX_QUESTIONS: usize = 2;
const MAX_ACTIONS: usize = 3;
const MAX_RESOURCES: usize = 2;

/// Never fails: internal errors degrade to the single "Getting Started" entry.
pub fn recommend(templates: &TemplateTable, categories: &[String]) -> Vec<RecommendationResult> {
    match try_recommend(templates, categories) {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::error!(error = %e, "Recommendation generation error");
            vec![fallback_recommendation()]
        }
    }
}

pub fn try_recommend(
    templates: &TemplateTable,
    categories: &[String],
) -> Result<Vec<RecommendationResult>, AppError> {
    let mut recommendations = Vec::new();

    for category in categories {
        let Some(template) = templates.get(category) else {
            continue;
        };

        let content = RecommendationContent {
            next_questions: first(&template.next_questions, MAX_QUESTIONS),
            suggested_actions: first(&template.action_items, MAX_ACTIONS),
            learning_resources: first(&template.learning_resources, MAX_RESOURCES),
        };
        if content.next_questions.is_empty()
            && content.suggested_actions.is_empty()
            && content.learning_resources.is_empty()
        {
            return Err(AppError::Internal(anyhow::anyhow!(
                "template '{category}' produced no content"
            )));
        }

        recommendations.push(build(
            display_category(category),
            RecommendationType::CareerGuidance,
            Priority::High,
            content,
        ));
    }

    if recommendations.is_empty() {
        recommendations.push(build(
            GENERAL_CATEGORY.to_string(),
            RecommendationType::CareerGuidance,
            Priority::Medium,
            general_content(),
        ));
    }

    recommendations.push(build(
        NEXT_STEPS_CATEGORY.to_string(),
        RecommendationType::ActionItems,
        Priority::Medium,
        next_steps_content(),
    ));

    recommendations.truncate(MAX_RECOMMENDATIONS);
    Ok(recommendations)
}

pub fn fallback_recommendation() -> RecommendationResult {
    build(
        FALLBACK_CATEGORY.to_string(),
        RecommendationType::CareerGuidance,
        Priority::High,
        fallback_content(),
    )
}

fn build(
    category: String,
    kind: RecommendationType,
    priority: Priority,
    content: RecommendationContent,
) -> RecommendationResult {
    RecommendationResult {
        category,
        kind,
        priority,
        content,
        timestamp: Utc::now(),
    }
}

fn first(items: &[String], n: usize) -> Vec<String> {
    items.iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::RecommendationTemplate;

    fn categories(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn labels(recs: &[RecommendationResult]) -> Vec<&str> {
        recs.iter().map(|r| r.category.as_str()).collect()
    }

    #[test]
    fn test_single_known_category() {
        let recs = recommend(&TemplateTable::builtin(), &categories(&["technology"]));
        assert_eq!(labels(&recs), vec!["Technology", "Next Steps"]);

        assert_eq!(recs[0].kind, RecommendationType::CareerGuidance);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].content.next_questions.len(), 2);
        assert_eq!(recs[0].content.suggested_actions.len(), 3);
        assert_eq!(recs[0].content.learning_resources.len(), 2);

        assert_eq!(recs[1].kind, RecommendationType::ActionItems);
        assert_eq!(recs[1].priority, Priority::Medium);
    }

    #[test]
    fn test_unknown_category_gets_general_exploration() {
        let recs = recommend(&TemplateTable::builtin(), &categories(&["unknown_category"]));
        assert_eq!(labels(&recs), vec!["General Exploration", "Next Steps"]);
        assert_eq!(recs[0].priority, Priority::Medium);
        assert_eq!(recs[0].kind, RecommendationType::CareerGuidance);
    }

    #[test]
    fn test_empty_input_gets_general_exploration() {
        let recs = recommend(&TemplateTable::builtin(), &[]);
        assert_eq!(labels(&recs), vec!["General Exploration", "Next Steps"]);
    }

    #[test]
    fn test_two_categories_keep_next_steps() {
        let recs = recommend(
            &TemplateTable::builtin(),
            &categories(&["aviation", "travel", "medical"]),
        );
        assert_eq!(labels(&recs), vec!["Aviation", "Medical", "Next Steps"]);
    }

    #[test]
    fn test_three_categories_push_out_next_steps() {
        let recs = recommend(
            &TemplateTable::builtin(),
            &categories(&["leadership", "mechanics", "technology", "aviation"]),
        );
        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        assert_eq!(labels(&recs), vec!["Leadership", "Mechanics", "Technology"]);
    }

    #[test]
    fn test_duplicate_categories_repeat() {
        let recs = recommend(
            &TemplateTable::builtin(),
            &categories(&["medical", "medical"]),
        );
        assert_eq!(labels(&recs), vec!["Medical", "Medical", "Next Steps"]);
    }

    #[test]
    fn test_short_template_lists_are_not_padded() {
        let mut table = TemplateTable::builtin();
        table.entries.insert(
            "travel".to_string(),
            RecommendationTemplate {
                next_questions: vec!["Where would you like to be stationed?".to_string()],
                action_items: vec![],
                learning_resources: vec![],
            },
        );
        let recs = recommend(&table, &categories(&["travel"]));
        assert_eq!(recs[0].content.next_questions.len(), 1);
        assert!(recs[0].content.suggested_actions.is_empty());
    }

    #[test]
    fn test_internal_error_degrades_to_fallback() {
        let mut table = TemplateTable::builtin();
        // bypasses load-time validation
        table.entries.insert(
            "travel".to_string(),
            RecommendationTemplate {
                next_questions: vec![],
                action_items: vec![],
                learning_resources: vec![],
            },
        );
        let input = categories(&["technology", "travel"]);
        assert!(try_recommend(&table, &input).is_err());

        let recs = recommend(&table, &input);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].category, "Getting Started");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[0].kind, RecommendationType::CareerGuidance);
    }

    #[test]
    fn test_output_is_stable_apart_from_timestamps() {
        let table = TemplateTable::builtin();
        let input = categories(&["aviation", "unknown"]);
        let a = recommend(&table, &input);
        let b = recommend(&table, &input);
        assert_eq!(labels(&a), labels(&b));
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.content, y.content);
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.priority, y.priority);
        }
    }
}
