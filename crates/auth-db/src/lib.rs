//! # auth-db
//!
//! Persistence layer implementing the `CredentialStore` port.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - `PgCredentialStore` (PostgreSQL) and `MemoryCredentialStore` (in-process)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use auth_db::pool::{create_pool, DatabaseConfig};
//! use auth_db::PgCredentialStore;
//! use auth_core::CredentialStore;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(std::env::var("DATABASE_URL")?);
//!     let pool = create_pool(&config).await?;
//!     let store = PgCredentialStore::new(pool);
//!
//!     let user = store.find_by_email("a@x.com").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{MemoryCredentialStore, PgCredentialStore};
