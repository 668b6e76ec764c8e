//! # auth-common
//!
//! Shared utilities including configuration, error handling, password hashing,
//! token issuance, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{Claims, PasswordHasher, TokenIssuer};
pub use config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, HashingConfig, JwtConfig,
    ServerConfig, MAX_TOKEN_TTL_SECONDS,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use telemetry::{try_init_tracing, TracingConfig, TracingError};
