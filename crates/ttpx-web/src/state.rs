//! Application state.

use std::sync::Arc;

use ttpx_llm::GeminiClient;

/// Application state shared across handlers.
///
/// The client is read-only; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<GeminiClient>,
}

impl AppState {
    pub fn new(client: Arc<GeminiClient>) -> Self {
        Self { client }
    }
}
