//! Credential hashing and bearer tokens

mod jwt;
mod password;

pub use jwt::{Claims, TokenIssuer};
pub use password::PasswordHasher;
