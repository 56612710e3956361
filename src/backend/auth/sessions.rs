/**
 * Session Tokens
 *
 * This module mints the signed session tokens returned by login.
 *
 * A token is an HS256 JWT signed with the target application's secret and
 * carrying:
 *
 * - `user_id` - id of the authenticated user
 * - `email` - email of the authenticated user
 * - `app_id` - id of the application the token is for
 * - `iat` - issuance time (Unix seconds)
 * - `exp` - `iat` plus the configured TTL (Unix seconds)
 *
 * Tokens are never stored and cannot be revoked; they stop being valid at
 * `exp`. The service only issues them. `decode_claims` is here for relying
 * applications and tests that hold the secret.
 */
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{App, User};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: i64,
    /// Email
    pub email: String,
    /// Application the token was issued for
    pub app_id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuance and decoding errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The application has no secret to sign with
    #[error("app {app_id} has an empty signing secret")]
    EmptySecret { app_id: i64 },

    /// The TTL does not fit in a timestamp
    #[error("token ttl of {0:?} is out of range")]
    InvalidTtl(Duration),

    /// Encoding or signing failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Signature, format or expiry check failed
    #[error("failed to decode token: {0}")]
    Decoding(#[source] jsonwebtoken::errors::Error),
}

/// Create a signed token for `user` on `app`, valid for `ttl` from now
pub fn create_token(user: &User, app: &App, ttl: Duration) -> Result<String, TokenError> {
    create_token_at(user, app, ttl, Utc::now())
}

/// Create a signed token as if issued at `now`
///
/// # Errors
///
/// * `TokenError::EmptySecret` - if `app.secret` is empty
/// * `TokenError::InvalidTtl` - if `now + ttl` overflows
/// * `TokenError::Signing` - if encoding fails
pub fn create_token_at(
    user: &User,
    app: &App,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, TokenError> {
    if app.secret.is_empty() {
        return Err(TokenError::EmptySecret { app_id: app.id });
    }

    let exp = chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or(TokenError::InvalidTtl(ttl))?;

    let claims = Claims {
        user_id: user.id,
        email: user.email.clone(),
        app_id: app.id,
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    let key = EncodingKey::from_secret(app.secret.as_bytes());
    encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(TokenError::Signing)
}

/// Verify a token's signature and expiry and return its claims
pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    let token_data = decode::<Claims>(token, &key, &validation).map_err(TokenError::Decoding)?;
    Ok(token_data.claims)
}
