//! Service layer error types
//!
//! Every failure leaving an `AuthService` operation is one of these five kinds.
//! Collaborator errors are remapped on the way in; internal details are kept for
//! logging but never rendered into the caller-facing message.

use auth_common::{AppError, ErrorResponse};
use auth_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Duplicate resource (email already registered)
    Conflict(String),

    /// Resource not found
    NotFound(String),

    /// Password did not match the stored hash
    InvalidCredential,

    /// Token invalid or expired
    Unauthorized,

    /// Unexpected failure; the detail is for logs only
    Internal(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict(msg) | Self::NotFound(msg) => write!(f, "{msg}"),
            Self::InvalidCredential => write!(f, "Invalid password"),
            Self::Unauthorized => write!(f, "Invalid token"),
            Self::Internal(_) => write!(f, "Internal server error"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Conflict(_) => 409,
            Self::NotFound(_) => 404,
            Self::InvalidCredential | Self::Unauthorized => 401,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Internal detail, if this is an internal error
    pub fn internal_detail(&self) -> Option<&str> {
        match self {
            Self::Internal(detail) => Some(detail),
            _ => None,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmailAlreadyExists => Self::conflict("User already exists"),
            other => Self::Internal(format!("{}: {other}", other.code())),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            e if e.is_token_rejection() => Self::Unauthorized,
            AppError::Internal(source) => Self::Internal(format!("{source:#}")),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        ErrorResponse::new(err.status_code(), err.to_string())
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        Self::from(&err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
