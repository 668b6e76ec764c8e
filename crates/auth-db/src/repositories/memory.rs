//! In-process credential store backed by a concurrent map
//!
//! Intended for embedding the service in-process and as a test double for
//! the PostgreSQL store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use std::sync::Arc;

use auth_core::{CredentialStore, DomainError, RepoResult, User, UserId};

/// Credential store keeping users in memory, keyed by email
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    users: Arc<DashMap<String, User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self.users.get(email).map(|entry| entry.value().clone()))
    }

    async fn create(&self, email: &str, name: &str, password_hash: &str) -> RepoResult<User> {
        // The entry guard holds the shard lock, making check-and-insert atomic
        match self.users.entry(email.to_string()) {
            Entry::Occupied(_) => Err(DomainError::EmailAlreadyExists),
            Entry::Vacant(slot) => {
                let user = User {
                    id: UserId::generate(),
                    email: email.to_string(),
                    name: name.to_string(),
                    password_hash: password_hash.to_string(),
                    created_at: Utc::now(),
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryCredentialStore::new();

        let created = store.create("a@x.com", "Alice", "hash").await.unwrap();
        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();

        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Alice");
        assert_eq!(found.password_hash, "hash");
    }

    #[tokio::test]
    async fn test_find_missing() {
        let store = MemoryCredentialStore::new();
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryCredentialStore::new();
        store.create("a@x.com", "Alice", "hash").await.unwrap();

        let result = store.create("a@x.com", "Other", "hash2").await;
        assert!(matches!(result, Err(DomainError::EmailAlreadyExists)));

        // Original record untouched
        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.name, "Alice");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_emails_are_case_sensitive() {
        let store = MemoryCredentialStore::new();
        store.create("a@x.com", "Alice", "hash").await.unwrap();

        assert!(store.create("A@x.com", "Alice", "hash").await.is_ok());
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_create_single_winner() {
        let store = MemoryCredentialStore::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create("race@x.com", &format!("user-{i}"), "hash")
                        .await
                })
            })
            .collect();

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::EmailAlreadyExists) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 15);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_ping_default() {
        assert!(MemoryCredentialStore::new().ping().await.is_ok());
    }
}
