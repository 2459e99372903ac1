// src/chat/service.rs
// The chat pipeline: credential check, input validation, prompt assembly,
// upstream call, reply extraction. One pass per request, no retries, no
// server-side session state.

use serde::Deserialize;
use serde_json::Value;

use crate::api::error::{ApiError, ApiResult};
use crate::chat::language::fallback_reply;
use crate::chat::validator::validate_message;
use crate::llm::ChatMessage;
use crate::prompt;
use crate::state::AppState;

/// Body of `POST /api/chat`. History is whatever the widget has accumulated
/// client-side; the server keeps nothing between requests.
///
/// `message` stays a raw JSON value so the validator can answer missing or
/// non-string payloads with its own reason instead of a decoding error.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Value,
    #[serde(default, rename = "messagesHistory")]
    pub messages_history: Vec<ChatMessage>,
}

/// Runs one chat request end to end and returns the reply text.
pub async fn handle_chat(state: &AppState, request: ChatRequest) -> ApiResult<String> {
    if !state.llm.is_configured() {
        return Err(ApiError::MissingCredential);
    }

    let message = validate_message(&request.message).map_err(ApiError::validation)?;

    let system_prompt = prompt::system_prompt(state.content.as_ref()).await;

    // Order matters upstream: system prompt, then the client-held history
    // verbatim, then the new message.
    let mut messages: Vec<ChatMessage> = Vec::with_capacity(request.messages_history.len() + 2);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend(request.messages_history);
    messages.push(ChatMessage::user(message));

    let reply = state
        .llm
        .complete(&messages)
        .await
        .map_err(ApiError::Upstream)?;

    // A success response with no usable choice gets the canned apology in
    // the guest's language.
    Ok(reply.unwrap_or_else(|| fallback_reply(message).to_string()))
}
