use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Failure taxonomy for the recommendation pipeline. Caller mistakes map to
/// 400, everything that goes wrong past validation maps to 500.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to connect to recommendation service: {0}")]
    UpstreamTransport(String),

    #[error("Failed to process LLM response. Invalid JSON from LLM: {0}")]
    UpstreamFormat(String),

    #[error("Could not parse recommendation or insight from LLM response. LLM might have deviated from format.")]
    UpstreamContent,
}

#[derive(serde::Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamTransport(_)
            | AppError::UpstreamFormat(_)
            | AppError::UpstreamContent => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
