//! Password hashing and verification
//!
//! Uses Argon2id with a random salt per hash. The configured work factor is the
//! Argon2 iteration count; verification reads the parameters back from the
//! stored PHC string, so hashes made under an older work factor keep verifying.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::config::HashingConfig;
use crate::error::{AppError, AppResult};

/// One-way salted password hasher
#[derive(Clone)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    config: HashingConfig,
}

impl PasswordHasher {
    /// Create a hasher for the given work factor and memory cost
    ///
    /// # Errors
    /// Returns a configuration error if Argon2 rejects the parameters
    pub fn new(config: HashingConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_cost_kib, config.work_factor, 1, None)
            .map_err(|e| AppError::config(format!("Invalid hashing parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            config,
        })
    }

    /// Configured hashing parameters
    #[must_use]
    pub fn config(&self) -> HashingConfig {
        self.config
    }

    /// Hash a plaintext password into a PHC string
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(anyhow::anyhow!("Password hashing failed: {e}")))
    }

    /// Verify a plaintext password against a stored hash
    ///
    /// The digest comparison is constant-time.
    ///
    /// # Errors
    /// Returns an error if the stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            AppError::internal(anyhow::anyhow!("Invalid password hash format: {e}"))
        })?;

        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(anyhow::anyhow!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
