//! Credential store implementations
//!
//! Adapters for the `CredentialStore` port defined in auth-core.

mod error;
mod memory;
mod user;

pub use memory::MemoryCredentialStore;
pub use user::PgCredentialStore;
