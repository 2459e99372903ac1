// src/api/http/health.rs

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// `GET /health`. Liveness only; neither the content store nor the
/// completion API is probed.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.llm.model(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
