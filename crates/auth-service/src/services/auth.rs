//! Authentication service
//!
//! Handles user registration, login and token verification with sliding renewal.

use auth_core::UserProfile;
use tracing::{debug, info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, VerifyTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// The store enforces email uniqueness atomically with the insert, so there
    /// is no lookup beforehand.
    #[instrument(skip_all)]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let RegisterRequest {
            email,
            name,
            password,
        } = request;

        let password_hash = self.hash_password(password).await?;

        let user = self
            .ctx
            .credential_store()
            .create(&email, &name, &password_hash)
            .await
            .map_err(|e| {
                if e.is_conflict() {
                    warn!("Registration rejected: email already registered");
                }
                ServiceError::from(e)
            })?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue(user.profile())
    }

    /// Login with email and password
    #[instrument(skip_all)]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let user = self
            .ctx
            .credential_store()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::not_found("User not found")
            })?;

        let is_valid = self
            .verify_password(request.password, user.password_hash.clone())
            .await?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::InvalidCredential);
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue(user.profile())
    }

    /// Verify a token and return a freshly signed one for the same user
    ///
    /// Every successful verification re-issues with a full ttl, so an active
    /// caller's session slides forward.
    #[instrument(skip_all)]
    pub async fn verify_token(&self, request: VerifyTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .token_issuer()
            .verify(&request.token)
            .map_err(|e| {
                debug!(reason = e.error_code(), "Token rejected");
                ServiceError::from(e)
            })?;

        let user = claims.into_user();
        debug!(user_id = %user.id, "Token verified, renewing");

        self.issue(user)
    }

    /// Sign a token for the public projection and wrap it in a response
    fn issue(&self, user: UserProfile) -> ServiceResult<AuthResponse> {
        let token = self.ctx.token_issuer().sign(&user)?;
        Ok(AuthResponse::new(user, token))
    }

    async fn hash_password(&self, password: String) -> ServiceResult<String> {
        let hasher = self.ctx.password_hasher();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| ServiceError::internal(format!("Hashing task failed: {e}")))?
            .map_err(ServiceError::from)
    }

    async fn verify_password(&self, password: String, hash: String) -> ServiceResult<bool> {
        let hasher = self.ctx.password_hasher();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| ServiceError::internal(format!("Verification task failed: {e}")))?
            .map_err(ServiceError::from)
    }
}
