use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// Completion client. Default: `GeminiClient`; tests inject a scripted client.
    pub llm: Arc<dyn CompletionClient>,
    pub config: Config,
}
