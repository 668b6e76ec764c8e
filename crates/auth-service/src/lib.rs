//! # auth-service
//!
//! Application layer containing the authentication use cases and their DTOs.

pub mod dto;
pub mod services;

pub use services::{AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
