pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers as chat;
use crate::matching::handlers as matching;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Conversation
        .route("/api/v1/chat", post(chat::handle_chat))
        // Matching
        .route("/api/v1/career-match", post(matching::handle_career_match))
        .route("/api/v1/careers", get(matching::handle_list_careers))
        .route("/api/v1/careers/forecast", post(matching::handle_forecast))
        .route("/api/v1/careers/:id", get(matching::handle_get_career))
        // Guidance
        .route(
            "/api/v1/recommendations",
            post(recommendations::handle_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::chat::service::ChatService;
    use crate::config::Config;
    use crate::matching::catalog::CareerCatalog;
    use crate::matching::scorer::KeywordMatchScorer;
    use crate::recommendations::templates::TemplateTable;

    fn test_state() -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
                llm_api_key: None,
                llm_api_url: String::new(),
                llm_model: "test-model".to_string(),
                llm_timeout: Duration::from_secs(1),
                career_catalog_path: None,
                recommendation_templates_path: None,
            },
            catalog: Arc::new(CareerCatalog::builtin()),
            templates: Arc::new(TemplateTable::builtin()),
            scorer: Arc::new(KeywordMatchScorer),
            chat: Arc::new(ChatService::new(None, Duration::from_secs(1))),
        }
    }

    async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = build_router(test_state())
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_fallback_chat() {
        let (status, body) = send(Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["chat_service"]["backend"], "fallback");
        assert_eq!(body["services"]["career_matcher"]["careers"], 5);
    }

    #[tokio::test]
    async fn test_root() {
        let (status, body) = send(Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["message"].as_str().unwrap().contains("running"));
    }

    #[tokio::test]
    async fn test_career_match_cyber() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/career-match",
            Some(json!({
                "interests": ["cyber", "technology"],
                "skills": [],
                "education_level": "high_school"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_matches"], 1);
        let top = &body["matches"][0];
        assert_eq!(top["career_path"]["id"], "cyber-operations");
        assert_eq!(top["match_score"], 0.7);
        assert_eq!(top["match_reasons"][0], "Matches your interest in cyber");
        assert!(top["career_path"].get("match_keywords").is_none());
        assert_eq!(top["civilian_outcome"]["certifications"][0], "Security+");
    }

    #[tokio::test]
    async fn test_career_match_no_overlap_is_ok_and_empty() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/career-match",
            Some(json!({ "interests": ["basketball"], "education_level": "high_school" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_matches"], 0);
        assert_eq!(body["matches"], json!([]));
    }

    #[tokio::test]
    async fn test_recommendations_technology() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({ "interests": ["technology"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert_eq!(body["recommendations"][0]["category"], "Technology");
        assert_eq!(body["recommendations"][0]["type"], "career_guidance");
        assert_eq!(body["recommendations"][0]["priority"], "high");
        assert_eq!(body["recommendations"][1]["category"], "Next Steps");
        assert_eq!(body["recommendations"][1]["type"], "action_items");
    }

    #[tokio::test]
    async fn test_recommendations_unknown_category() {
        let (_, body) = send(
            Method::POST,
            "/api/v1/recommendations",
            Some(json!({ "interests": ["unknown_category"] })),
        )
        .await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["recommendations"][0]["category"], "General Exploration");
        assert_eq!(body["recommendations"][1]["category"], "Next Steps");
    }

    #[tokio::test]
    async fn test_list_careers_with_filter() {
        let (status, body) = send(Method::GET, "/api/v1/careers?branch=army", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 2);
        assert!(body["career_paths"][0].get("match_keywords").is_none());
    }

    #[tokio::test]
    async fn test_get_career_and_not_found() {
        let (status, body) = send(Method::GET, "/api/v1/careers/combat-medic", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Combat Medic / Healthcare Specialist");

        let (status, body) = send(Method::GET, "/api/v1/careers/astronaut", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_forecast() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/careers/forecast",
            Some(json!({ "career_path_id": "aviation-mechanic" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timeline"].as_array().unwrap().len(), 4);
        assert_eq!(body["timeline"][0]["rank"], "Seaman Recruit");

        for years in [9, -1, 300] {
            let (status, body) = send(
                Method::POST,
                "/api/v1/careers/forecast",
                Some(json!({ "career_path_id": "aviation-mechanic", "service_years": years })),
            )
            .await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        }
    }

    #[tokio::test]
    async fn test_chat_attaches_guidance() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/chat",
            Some(json!({ "message": "I'm interested in cyber security and computer work" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["response"].as_str().unwrap().starts_with("Technology and cybersecurity"));
        assert_eq!(body["confidence"], 0.7);
        assert_eq!(body["recommendations"][0]["category"], "Technology");
        assert_eq!(body["career_paths"][0]["career_path"]["id"], "cyber-operations");
    }

    #[tokio::test]
    async fn test_chat_without_interests_has_no_guidance() {
        let (status, body) = send(
            Method::POST,
            "/api/v1/chat",
            Some(json!({ "message": "What should I do?" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"], json!([]));
        assert_eq!(body["career_paths"], json!([]));
    }

    #[tokio::test]
    async fn test_chat_rejects_blank_message() {
        let (status, body) = send(Method::POST, "/api/v1/chat", Some(json!({ "message": "  " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
