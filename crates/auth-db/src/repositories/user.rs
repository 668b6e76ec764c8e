//! PostgreSQL implementation of CredentialStore

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use auth_core::{CredentialStore, DomainError, RepoResult, User, UserId};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of CredentialStore
///
/// Email uniqueness is enforced by the `users_email_key` constraint, so two
/// concurrent inserts for the same email cannot both succeed.
#[derive(Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Create a new PgCredentialStore
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    #[instrument(skip_all)]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, email, name, password_hash, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip_all)]
    async fn create(&self, email: &str, name: &str, password_hash: &str) -> RepoResult<User> {
        let id = UserId::generate();

        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (id, email, name, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, password_hash, created_at
            ",
        )
        .bind(id.into_inner())
        .bind(email)
        .bind(name)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        debug!(user_id = %model.id, "User row inserted");
        Ok(User::from(model))
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
