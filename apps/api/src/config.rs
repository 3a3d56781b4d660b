use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_LLM_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration loaded from environment variables.
/// Everything has a default; the service runs without an LLM key.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// `None` when unset or still a placeholder value.
    pub llm_api_key: Option<String>,
    pub llm_api_url: String,
    pub llm_model: String,
    pub llm_timeout: Duration,
    pub career_catalog_path: Option<PathBuf>,
    pub recommendation_templates_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_timeout_secs = std::env::var("LLM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !is_placeholder_key(key)),
            llm_api_url: std::env::var("LLM_API_URL")
                .unwrap_or_else(|_| DEFAULT_LLM_API_URL.to_string()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            career_catalog_path: optional_path("CAREER_CATALOG_PATH"),
            recommendation_templates_path: optional_path("RECOMMENDATION_TEMPLATES_PATH"),
        })
    }
}

/// Keys shipped in sample `.env` files are treated as "not configured".
fn is_placeholder_key(key: &str) -> bool {
    let key = key.trim();
    key.is_empty() || key == "sk-dummy-key-for-testing" || key.starts_with("sk-your-")
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_keys_are_rejected() {
        assert!(is_placeholder_key(""));
        assert!(is_placeholder_key("   "));
        assert!(is_placeholder_key("sk-dummy-key-for-testing"));
        assert!(is_placeholder_key("sk-your-key-here"));
    }

    #[test]
    fn test_real_looking_key_is_accepted() {
        assert!(!is_placeholder_key("sk-proj-abc123"));
    }
}
