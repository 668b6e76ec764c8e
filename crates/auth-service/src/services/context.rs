//! Service context - dependency container for services
//!
//! Holds the credential store, token issuer and password hasher. The concrete
//! store is bound at construction, so tests can substitute their own.

use std::sync::Arc;

use auth_common::{PasswordHasher, TokenIssuer};
use auth_core::CredentialStore;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    credential_store: Arc<dyn CredentialStore>,
    token_issuer: Arc<TokenIssuer>,
    password_hasher: Arc<PasswordHasher>,
}

impl ServiceContext {
    /// Create a new service context
    pub fn new(
        credential_store: Arc<dyn CredentialStore>,
        token_issuer: Arc<TokenIssuer>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            credential_store,
            token_issuer,
            password_hasher,
        }
    }

    /// Get the credential store
    pub fn credential_store(&self) -> &dyn CredentialStore {
        self.credential_store.as_ref()
    }

    /// Get the token issuer
    pub fn token_issuer(&self) -> &TokenIssuer {
        self.token_issuer.as_ref()
    }

    /// Get a shared handle to the password hasher
    ///
    /// Returned as an `Arc` so it can be moved onto the blocking pool.
    pub fn password_hasher(&self) -> Arc<PasswordHasher> {
        Arc::clone(&self.password_hasher)
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("credential_store", &"dyn CredentialStore")
            .field("token_issuer", &self.token_issuer)
            .field("password_hasher", &self.password_hasher)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    credential_store: Option<Arc<dyn CredentialStore>>,
    token_issuer: Option<Arc<TokenIssuer>>,
    password_hasher: Option<Arc<PasswordHasher>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credential_store(mut self, store: Arc<dyn CredentialStore>) -> Self {
        self.credential_store = Some(store);
        self
    }

    pub fn token_issuer(mut self, issuer: TokenIssuer) -> Self {
        self.token_issuer = Some(Arc::new(issuer));
        self
    }

    pub fn password_hasher(mut self, hasher: PasswordHasher) -> Self {
        self.password_hasher = Some(Arc::new(hasher));
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.credential_store
                .ok_or_else(|| ServiceError::internal("credential_store is required"))?,
            self.token_issuer
                .ok_or_else(|| ServiceError::internal("token_issuer is required"))?,
            self.password_hasher
                .ok_or_else(|| ServiceError::internal("password_hasher is required"))?,
        ))
    }
}
