use std::sync::Arc;

use crate::llm_client::Completion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Completion collaborator. `LlmClient` in production, swapped for a fake in tests.
    pub completion: Arc<dyn Completion>,
}
