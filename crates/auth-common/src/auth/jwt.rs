//! Bearer token issuance and verification
//!
//! Tokens are HS256 JWTs carrying the user's public projection plus the
//! protocol fields `sub`, `jti`, `iat` and `exp`. They are self-contained and
//! expire purely by elapsed time.

use auth_core::{UserId, UserProfile};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{JwtConfig, MAX_TOKEN_TTL_SECONDS};
use crate::error::{AppError, AppResult};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Unique token ID, distinct for every issuance
    pub jti: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Public user fields
    #[serde(flatten)]
    pub user: UserProfile,
}

impl Claims {
    /// Get the user ID named by the subject
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid user ID
    pub fn user_id(&self) -> AppResult<UserId> {
        self.sub.parse().map_err(|_| AppError::InvalidToken)
    }

    /// Drop the protocol fields and keep the public user projection
    #[must_use]
    pub fn into_user(self) -> UserProfile {
        self.user
    }
}

/// Signs and verifies bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create a new token issuer with the given secret and ttl in seconds
    ///
    /// # Errors
    /// Returns a configuration error unless `ttl_seconds` is in
    /// `1..=MAX_TOKEN_TTL_SECONDS`
    pub fn new(secret: &str, ttl_seconds: i64) -> AppResult<Self> {
        let ttl = Some(ttl_seconds)
            .filter(|s| (1..=MAX_TOKEN_TTL_SECONDS).contains(s))
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AppError::config(format!("Token ttl out of range: {ttl_seconds}s")))?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        })
    }

    /// Create a token issuer from configuration
    ///
    /// # Errors
    /// Returns a configuration error if the configured ttl is out of range
    pub fn from_config(config: &JwtConfig) -> AppResult<Self> {
        Self::new(&config.secret, config.ttl_seconds)
    }

    /// Token time-to-live
    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a fresh token for a user, valid for the full ttl from now
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn sign(&self, user: &UserProfile) -> AppResult<String> {
        self.sign_at(user, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`
    ///
    /// # Errors
    /// Returns an error if the expiry is not representable or token encoding fails
    pub fn sign_at(&self, user: &UserProfile, issued_at: DateTime<Utc>) -> AppResult<String> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::internal(anyhow::anyhow!("Token expiry out of range")))?;

        let claims = Claims {
            sub: user.id.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            user: user.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a token
    ///
    /// # Errors
    /// Returns `TokenExpired` once the embedded expiry has passed and
    /// `InvalidToken` for a bad signature, malformed structure or a subject
    /// that does not match the embedded user
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        let claims = token_data.claims;
        if claims.user_id()? != claims.user.id {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("ttl_seconds", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}
