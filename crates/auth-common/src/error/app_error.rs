//! Application error types
//!
//! Infrastructure-level errors shared by the token issuer, the password hasher
//! and server bootstrap, plus the wire error envelope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Token errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Get status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired => 401,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
        }
    }

    /// Get error code for logs and API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if the token could not be accepted (invalid or expired)
    #[must_use]
    pub fn is_token_rejection(&self) -> bool {
        matches!(self, Self::InvalidToken | Self::TokenExpired)
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl fmt::Display) -> Self {
        Self::Config(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Error envelope returned to callers: `{status, message}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
        assert_eq!(AppError::config("bad").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidToken.error_code(), "INVALID_TOKEN");
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(AppError::internal(anyhow::anyhow!("x")).error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_is_token_rejection() {
        assert!(AppError::InvalidToken.is_token_rejection());
        assert!(AppError::TokenExpired.is_token_rejection());
        assert!(!AppError::Database("x".to_string()).is_token_rejection());
    }

    #[test]
    fn test_internal_message_hides_source() {
        let err = AppError::internal(anyhow::anyhow!("secret detail"));
        let response = ErrorResponse::from(&err);

        assert_eq!(response.status, 500);
        assert_eq!(response.message, "Internal server error");
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::from(AppError::InvalidToken);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "status": 401, "message": "Invalid token" }));
    }
}
