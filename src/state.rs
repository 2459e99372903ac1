// src/state.rs

use std::sync::Arc;

use crate::content::{ContentApiClient, ContentStore};
use crate::llm::CompletionClient;

/// Handles shared with every request handler. Built once at startup and
/// read-only afterwards; nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    pub llm: CompletionClient,
}

impl AppState {
    pub fn new(content: Arc<dyn ContentStore>, llm: CompletionClient) -> Self {
        Self { content, llm }
    }

    /// Production wiring from the process environment.
    pub fn from_config() -> Self {
        Self::new(
            Arc::new(ContentApiClient::from_config()),
            CompletionClient::from_config(),
        )
    }
}
