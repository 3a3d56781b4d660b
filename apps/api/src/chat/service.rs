//! Chat service: produces a counselor reply for a user message.
//!
//! The LLM is optional: without one, or when it fails or times out, a canned
//! local reply is used. Chat failures never reach the matching/recommendation code.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::chat::fallback::fallback_reply;
use crate::chat::interests::should_trigger_recommendations;
use crate::chat::prompts::{COUNSELOR_SYSTEM, HISTORY_WINDOW};
use crate::llm_client::{LlmClient, LlmError, LlmMessage};

const LLM_CONFIDENCE: f64 = 0.85;
const NO_LLM_CONFIDENCE: f64 = 0.7;
const LLM_FAILED_CONFIDENCE: f64 = 0.5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

fn default_role() -> String {
    "user".to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub response: String,
    pub trigger_recommendations: bool,
    pub confidence: f64,
}

/// Source of natural-language replies. Implemented by `LlmClient`; swapped out in tests.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, message: &str, history: &[ChatMessage]) -> Result<String, LlmError>;
}

#[async_trait]
impl ReplyGenerator for LlmClient {
    async fn generate(&self, message: &str, history: &[ChatMessage]) -> Result<String, LlmError> {
        let recent = &history[history.len().saturating_sub(HISTORY_WINDOW)..];

        let mut messages = Vec::with_capacity(recent.len() + 2);
        messages.push(LlmMessage {
            role: "system",
            content: COUNSELOR_SYSTEM,
        });
        messages.extend(recent.iter().map(|m| LlmMessage {
            role: &m.role,
            content: &m.content,
        }));
        messages.push(LlmMessage {
            role: "user",
            content: message,
        });

        let response = self.complete(&messages).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

pub struct ChatService {
    generator: Option<Arc<dyn ReplyGenerator>>,
    timeout: Duration,
}

impl ChatService {
    pub fn new(generator: Option<Arc<dyn ReplyGenerator>>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    pub fn llm_enabled(&self) -> bool {
        self.generator.is_some()
    }

    pub async fn process_message(&self, message: &str, history: &[ChatMessage]) -> ChatReply {
        let Some(generator) = &self.generator else {
            return ChatReply {
                response: fallback_reply(message).to_string(),
                trigger_recommendations: true,
                confidence: NO_LLM_CONFIDENCE,
            };
        };

        let result = match tokio::time::timeout(self.timeout, generator.generate(message, history)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout)),
        };

        match result {
            Ok(response) => ChatReply {
                trigger_recommendations: should_trigger_recommendations(message),
                response,
                confidence: LLM_CONFIDENCE,
            },
            Err(e) => {
                tracing::error!(error = %e, "LLM reply failed, using fallback");
                ChatReply {
                    response: fallback_reply(message).to_string(),
                    trigger_recommendations: true,
                    confidence: LLM_FAILED_CONFIDENCE,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    #[async_trait]
    impl ReplyGenerator for EchoGenerator {
        async fn generate(&self, message: &str, history: &[ChatMessage]) -> Result<String, LlmError> {
            Ok(format!("{} turns, you said: {message}", history.len()))
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl ReplyGenerator for FailingGenerator {
        async fn generate(&self, _: &str, _: &[ChatMessage]) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 401,
                message: "Invalid API key".to_string(),
            })
        }
    }

    struct SlowGenerator;

    #[async_trait]
    impl ReplyGenerator for SlowGenerator {
        async fn generate(&self, _: &str, _: &[ChatMessage]) -> Result<String, LlmError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("too late".to_string())
        }
    }

    fn service(generator: Option<Arc<dyn ReplyGenerator>>) -> ChatService {
        ChatService::new(generator, Duration::from_secs(30))
    }

    #[tokio::test]
    async fn test_without_llm_uses_fallback() {
        let reply = service(None).process_message("hello", &[]).await;
        assert!(reply.response.starts_with("Hello!"));
        assert!(reply.trigger_recommendations);
        assert_eq!(reply.confidence, NO_LLM_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_llm_reply_is_used() {
        let history = vec![ChatMessage {
            role: "assistant".to_string(),
            content: "Hi!".to_string(),
        }];
        let reply = service(Some(Arc::new(EchoGenerator)))
            .process_message("I'd like a career in aviation", &history)
            .await;
        assert_eq!(reply.response, "1 turns, you said: I'd like a career in aviation");
        assert!(reply.trigger_recommendations);
        assert_eq!(reply.confidence, LLM_CONFIDENCE);
    }

    #[tokio::test]
    async fn test_llm_reply_without_trigger_phrase() {
        let reply = service(Some(Arc::new(EchoGenerator)))
            .process_message("hello", &[])
            .await;
        assert!(!reply.trigger_recommendations);
    }

    #[tokio::test]
    async fn test_llm_failure_degrades_to_fallback() {
        let reply = service(Some(Arc::new(FailingGenerator)))
            .process_message("tell me about medical jobs", &[])
            .await;
        assert!(reply.response.starts_with("Military medical careers"));
        assert!(reply.trigger_recommendations);
        assert_eq!(reply.confidence, LLM_FAILED_CONFIDENCE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_llm_timeout_degrades_to_fallback() {
        let reply = service(Some(Arc::new(SlowGenerator)))
            .process_message("pilot", &[])
            .await;
        assert!(reply.response.starts_with("Aviation careers"));
        assert_eq!(reply.confidence, LLM_FAILED_CONFIDENCE);
    }

    #[test]
    fn test_chat_message_role_defaults_to_user() {
        let msg: ChatMessage = serde_json::from_str(r#"{"content": "hi"}"#).unwrap();
        assert_eq!(msg.role, "user");
    }
}
