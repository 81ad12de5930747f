use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The upstream completion backend. Trait object so tests can substitute
    /// a scripted backend and assert on call counts.
    pub llm: Arc<dyn ChatBackend>,
    pub config: Config,
}
