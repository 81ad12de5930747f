use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to status 500 with body `{"error": message}` — the
/// client treats all proxy failures uniformly, so the server does not
/// differentiate status codes per failure kind. The message text is
/// surfaced as-is; this endpoint is not a security-hardened boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    BadPayload(String),

    #[error("{0}")]
    Llm(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::BadPayload(msg) => {
                tracing::error!("Bad payload: {msg}");
                self.to_string()
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                self.to_string()
            }
        };

        let body = Json(json!({ "error": message }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn response_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_key_maps_to_500_error_body() {
        let (status, body) = response_json(AppError::Llm(LlmError::MissingApiKey)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "API key is not configured on the server"
        );
    }

    #[tokio::test]
    async fn test_upstream_status_text_is_embedded_in_message() {
        let err = AppError::Llm(LlmError::Api {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        });
        let (status, body) = response_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "upstream API error: Service Unavailable"
        );
    }

    #[tokio::test]
    async fn test_empty_content_maps_to_500_not_200() {
        let (status, body) = response_json(AppError::Llm(LlmError::EmptyContent)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "no valid response content from the AI");
    }

    #[tokio::test]
    async fn test_bad_payload_surfaces_parser_message() {
        let (status, body) =
            response_json(AppError::BadPayload("expected value at line 1".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "Invalid request body: expected value at line 1"
        );
    }
}
