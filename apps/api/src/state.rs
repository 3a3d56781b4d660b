use std::sync::Arc;

use crate::chat::service::ChatService;
use crate::config::Config;
use crate::matching::catalog::CareerCatalog;
use crate::matching::scorer::MatchScorer;
use crate::recommendations::templates::TemplateTable;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything behind the `Arc`s is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CareerCatalog>,
    pub templates: Arc<TemplateTable>,
    /// Pluggable match scorer. Default: KeywordMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub chat: Arc<ChatService>,
}
