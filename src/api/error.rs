// src/api/error.rs
// Error taxonomy for the chat API. Every failure path answers with exactly
// one JSON object of the shape {"error": "..."}.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Generic message for failures whose details stay server-side.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again later.";

/// Message returned when the upstream credential is missing.
pub const NOT_CONFIGURED_ERROR: &str = "Chat service is not configured. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// OPENAI_API_KEY is absent. Checked before anything else in the
    /// handler, including input validation.
    #[error("upstream API credential is not configured")]
    MissingCredential,

    /// The message was rejected by the input filter. The reason string is
    /// shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// The completion API answered with a non-success status or an
    /// unreadable body. Details are logged, never surfaced.
    #[error("upstream completion request failed")]
    Upstream(#[source] anyhow::Error),

    /// Anything else that escapes the handler. Logged and flattened into a
    /// generic 500.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation(reason.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingCredential | ApiError::Upstream(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::MissingCredential => {
                error!("chat request refused: OPENAI_API_KEY is not set");
                NOT_CONFIGURED_ERROR.to_string()
            }
            ApiError::Validation(reason) => reason.clone(),
            ApiError::Upstream(err) => {
                error!("upstream completion failure: {err:#}");
                GENERIC_ERROR.to_string()
            }
            ApiError::Internal(err) => {
                error!("unhandled error in chat handler: {err:#}");
                GENERIC_ERROR.to_string()
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
