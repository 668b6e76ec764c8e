//! Credential store port - persistence of user records keyed by email
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Create a new user and return the stored record.
    ///
    /// Uniqueness of `email` is enforced by the store itself in the same atomic
    /// step as the insert; a duplicate yields `DomainError::EmailAlreadyExists`
    /// and leaves the existing record untouched.
    async fn create(&self, email: &str, name: &str, password_hash: &str) -> RepoResult<User>;

    /// Check that the backing storage is reachable
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
