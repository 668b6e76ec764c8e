//! Integration test utilities for the auth server
//!
//! Helpers for running end-to-end tests against the HTTP API.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
