use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to analyze data: {0}")]
    AnalyzeFailed(String),

    #[error("Failed to generate response: {0}")]
    GenerateFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Body sent to the client. The analyze route never exposes the
    /// underlying parser text, the generate route always does.
    pub fn to_body(&self) -> ErrorResponse {
        match self {
            AppError::AnalyzeFailed(_) => ErrorResponse {
                error: "Failed to analyze data".to_string(),
                message: None,
            },
            AppError::GenerateFailed(msg) => ErrorResponse {
                error: "Failed to generate response".to_string(),
                message: Some(msg.clone()),
            },
            AppError::ConfigError(msg) => ErrorResponse {
                error: "Configuration error".to_string(),
                message: Some(msg.clone()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self.to_body())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
