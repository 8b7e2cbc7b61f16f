// src/error.rs
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The pool could not hand out a connection.
    #[error("{context}: connection failed: {source}")]
    ConnectionError {
        source: sqlx::Error,
        context: &'static str,
    },
    /// A statement failed and the failure isn't classified any further.
    #[error("{context}: {source}")]
    QueryError {
        source: sqlx::Error,
        context: &'static str,
    },
    #[error("{0}")]
    DuplicateKey(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    ValidationError(String),
}

impl AppError {
    pub fn connection(source: sqlx::Error, context: &'static str) -> Self {
        AppError::ConnectionError { source, context }
    }

    pub fn query(source: sqlx::Error, context: &'static str) -> Self {
        AppError::QueryError { source, context }
    }

    pub fn duplicate_key(msg: impl Into<String>) -> Self {
        AppError::DuplicateKey(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConnectionError { .. } | AppError::QueryError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::DuplicateKey(_) | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            AppError::ConnectionError { source, context } => {
                tracing::error!(error = %source, "{context}: database unreachable");
                context.to_string()
            }
            AppError::QueryError { source, context } => {
                tracing::error!(error = %source, "{context}");
                context.to_string()
            }
            AppError::DuplicateKey(msg) => {
                tracing::warn!("{msg}");
                msg.clone()
            }
            AppError::NotFound(msg) => {
                tracing::debug!("{msg}");
                msg.clone()
            }
            AppError::ValidationError(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
