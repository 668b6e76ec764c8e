//! # auth-core
//!
//! Domain layer containing the user entity, its public projection, the `UserId`
//! value object and the `CredentialStore` port.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{User, UserProfile};
pub use error::DomainError;
pub use traits::{CredentialStore, RepoResult};
pub use value_objects::{UserId, UserIdParseError};
