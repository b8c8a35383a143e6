//! API error types with IntoResponse
//!
//! Errors are rendered as the failure envelope. Storage errors are logged
//! and replaced by the handler's generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::envelope;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed path or body (400)
    Validation {
        message: &'static str,
        cause: ValidationError,
    },

    /// Resource not found (404)
    NotFound { message: &'static str },

    /// Uniqueness violated (409)
    Conflict { message: &'static str },

    /// Storage failure (500, logged)
    Internal {
        message: &'static str,
        cause: DbError,
    },
}

impl ApiError {
    pub fn validation(message: &'static str, cause: ValidationError) -> Self {
        Self::Validation { message, cause }
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::NotFound { message }
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::Conflict { message }
    }

    pub fn internal(message: &'static str, cause: DbError) -> Self {
        Self::Internal { message, cause }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    pub fn message(&self) -> &'static str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Internal { message, .. } => *message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Validation { message, cause } => {
                tracing::debug!(%cause, "{}", message);
            }
            Self::Internal { message, cause } => {
                // Log the actual error, return generic message
                tracing::error!(error = %cause, "{}", message);
            }
            Self::NotFound { .. } | Self::Conflict { .. } => {}
        }

        envelope::failure(self.status(), self.message())
    }
}
