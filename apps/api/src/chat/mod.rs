// Conversational front door: LLM-backed replies with a local fallback, plus the
// keyword interest extraction that feeds the matching and recommendation pipelines.

pub mod fallback;
pub mod handlers;
pub mod interests;
pub mod prompts;
pub mod service;
