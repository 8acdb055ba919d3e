//! Admin gate primitives: Argon2 password hashes and signed session tokens.
//!
//! The content store itself performs no access control. Whatever exposes the
//! mutators to untrusted callers must check a token first.

pub mod password;
pub mod token;

use thiserror::Error;

pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, AdminClaims};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("token encoding failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}
