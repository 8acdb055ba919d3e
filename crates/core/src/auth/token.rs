use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::AuthError;

/// Subject of every admin token. There is a single operator role.
pub const ADMIN_SUBJECT: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign an admin session token valid for `ttl`.
pub fn issue_token(secret: &str, ttl: Duration) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
    let claims = AdminClaims {
        sub: ADMIN_SUBJECT.to_string(),
        iat: now,
        exp: now.saturating_add(ttl),
    };
    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Verify signature, expiry and subject of an admin token.
pub fn verify_token(secret: &str, token: &str) -> Result<AdminClaims, AuthError> {
    let data = decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::InvalidToken)?;

    if data.claims.sub != ADMIN_SUBJECT {
        return Err(AuthError::InvalidToken);
    }
    Ok(data.claims)
}
