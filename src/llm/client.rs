// src/llm/client.rs

//! Low-level client for the upstream chat-completion API.
//! No wrappers; just reqwest and typed request/response structs.

use anyhow::{Result, anyhow};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::config::CONFIG;
use crate::llm::schema::ChatMessage;

// Fixed generation parameters for the concierge. The prompt already asks for
// short answers; the token cap is the hard stop.
pub const MAX_COMPLETION_TOKENS: u32 = 500;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;

#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Option<Vec<CompletionChoice>>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionResponse {
    /// Text of the first choice, when the API returned one.
    fn first_text(self) -> Option<String> {
        self.choices?.into_iter().next()?.message?.content
    }
}

impl CompletionClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key,
            model: model.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(
            CONFIG.openai_base_url.clone(),
            CONFIG.openai_api_key.clone(),
            CONFIG.model.clone(),
        )
    }

    /// Whether the upstream credential is present. Checked per request; the
    /// key is never accepted from client input.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends the full message array upstream and returns the first choice's
    /// text, or `None` when the response carried no usable choice.
    ///
    /// One request, one response: no retry, no explicit timeout. If the
    /// upstream hangs, this call hangs with it.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<Option<String>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("OPENAI_API_KEY not set"))?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        };

        let resp = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            error!("completion endpoint returned {}: {}", status, detail);
            return Err(anyhow!("completion endpoint returned {}", status));
        }

        let completion: CompletionResponse = resp.json().await?;
        Ok(completion.first_text())
    }
}
