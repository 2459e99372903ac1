// src/api/http/router.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::api::http::{chat, health};
use crate::config::CONFIG;
use crate::state::AppState;

/// Builds the service router: the chat endpoint, the health probe, request
/// tracing, and CORS restricted to the website origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat_handler))
        .route("/health", get(health::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&CONFIG.cors_origin))
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origin.parse::<HeaderValue>() {
        Ok(value) => cors.allow_origin(value),
        Err(_) => {
            warn!("CORS origin {:?} is not a valid header value, allowing any origin", origin);
            cors.allow_origin(Any)
        }
    }
}
