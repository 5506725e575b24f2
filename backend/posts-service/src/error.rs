/// Error types for Posts Service
///
/// Every failure is terminal for the request. Errors are rendered as JSON
/// with an HTTP status and an RPC-style error code so clients can branch on
/// `code` without parsing messages.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Message returned when a fetched post has no author in the identity batch.
pub const AUTHOR_NOT_FOUND: &str = "user for post not found";

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Request input failed field validation
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Request body could not be parsed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Caller identity missing or invalid
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Identity directory call failed
    #[error("Identity service error: {0}")]
    IdentityService(String),

    /// Internal consistency fault
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// RPC-style error code carried in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Database(_) | AppError::IdentityService(_) | AppError::Internal(_) => {
                "INTERNAL_SERVER_ERROR"
            }
        }
    }

    fn field_details(&self) -> Option<BTreeMap<String, Vec<String>>> {
        let AppError::Validation(errors) = self else {
            return None;
        };

        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let rules = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), rules)
            })
            .collect();

        Some(fields)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::IdentityService(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Upstream failures are logged in full but surfaced generically.
        let message = match self {
            AppError::Database(err) => {
                tracing::error!(error = %err, "database failure");
                "Database error".to_string()
            }
            AppError::IdentityService(err) => {
                tracing::error!(error = %err, "identity service failure");
                "Identity service error".to_string()
            }
            other => other.to_string(),
        };

        let mut body = json!({
            "error": message,
            "code": self.code(),
            "status": status.as_u16(),
        });
        if let Some(fields) = self.field_details() {
            body["fields"] = json!(fields);
        }

        HttpResponse::build(status).json(body)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::IdentityService(err.to_string())
    }
}
