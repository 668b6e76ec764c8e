//! Ports implemented by the infrastructure layer

mod credential_store;

pub use credential_store::{CredentialStore, RepoResult};
