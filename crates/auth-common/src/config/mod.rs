//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, HashingConfig, JwtConfig,
    ServerConfig, MAX_TOKEN_TTL_SECONDS,
};
