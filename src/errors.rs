//! Centralized error handling.
//!
//! A single error type covers the whole request pipeline and converts
//! itself into the HTTP error body, so handlers return `AppResult` and
//! never build error responses by hand.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types.
///
/// Client errors name the offending request field; everything else is
/// collapsed into a generic server error at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AppError {
    // Request validation
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    // Collaborator failures
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Password hashing failed")]
    Hashing(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body: `{ "name": ..., "message": ... }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    name: &'static str,
    message: String,
}

impl AppError {
    /// Error name reported to the client.
    fn name(&self) -> &'static str {
        match self {
            AppError::MissingParam(_) => "MissingParamError",
            AppError::InvalidParam(_) => "InvalidParamError",
            AppError::Database(_) | AppError::Hashing(_) | AppError::Internal(_) => "ServerError",
        }
    }

    /// HTTP status code.
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Hashing(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-facing message. Validation errors name the field; the cause of
    /// a server-side failure is logged and replaced with a generic message.
    fn user_message(&self) -> String {
        match self {
            AppError::MissingParam(_) | AppError::InvalidParam(_) => self.to_string(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Hashing(e) => {
                tracing::error!("Password hashing error: {}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            name: self.name(),
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        AppError::MissingParam(field.into())
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        AppError::InvalidParam(field.into())
    }

    pub fn hashing(cause: impl Into<String>) -> Self {
        AppError::Hashing(cause.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_body(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_missing_param_names_the_field() {
        let (status, body) = response_body(AppError::missing_param("name")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], "MissingParamError");
        assert_eq!(body["message"], "Missing param: name");
    }

    #[tokio::test]
    async fn test_invalid_param_names_the_field() {
        let (status, body) = response_body(AppError::invalid_param("passwordConfirmation")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["name"], "InvalidParamError");
        assert_eq!(body["message"], "Invalid param: passwordConfirmation");
    }

    #[tokio::test]
    async fn test_internal_error_is_generic() {
        let (status, body) = response_body(AppError::internal("connection refused")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["name"], "ServerError");
        assert_eq!(body["message"], "Internal server error");
        // The cause must never leak into the body.
        assert!(!body["message"].as_str().unwrap().contains("refused"));
    }

    #[tokio::test]
    async fn test_hashing_error_is_generic() {
        let (status, body) = response_body(AppError::hashing("salt generation failed")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["name"], "ServerError");
        assert_eq!(body["message"], "Internal server error");
    }
}
