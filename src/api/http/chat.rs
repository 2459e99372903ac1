// src/api/http/chat.rs

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::{Value, json};

use crate::api::error::{ApiError, ApiResult};
use crate::chat::{ChatRequest, handle_chat};
use crate::state::AppState;

/// `POST /api/chat`.
///
/// The body extractor is taken as a `Result` so an unreadable JSON body
/// becomes a 400 `{"error": ...}` object instead of the extractor's
/// plain-text rejection.
pub async fn chat_handler(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let response = handle_chat(&state, request).await?;
    Ok(Json(json!({ "response": response })))
}
