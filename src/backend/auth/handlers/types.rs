/**
 * Authentication Handler Types
 *
 * Request and response bodies for the authentication endpoints, plus the
 * input checks each request must pass before it reaches `AuthService`.
 *
 * Request fields default when absent, so a missing field is reported by
 * `validate` with the same message as an empty one.
 */

use serde::{Deserialize, Serialize};

use crate::shared::SharedError;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_credentials(&self.email, &self.password)
    }
}

/// Registration response
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct RegisterResponse {
    /// Id assigned to the new user
    pub user_id: i64,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Application the token is requested for
    #[serde(default)]
    pub app_id: i64,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_credentials(&self.email, &self.password)?;
        if self.app_id == 0 {
            return Err(SharedError::validation("app_id", "app_id is required"));
        }
        Ok(())
    }
}

/// Login response
///
/// The token is an HS256 JWT signed with the application's secret.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
}

/// Admin check request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct IsAdminRequest {
    #[serde(default)]
    pub user_id: i64,
}

impl IsAdminRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.user_id == 0 {
            return Err(SharedError::validation("user_id", "user_id is required"));
        }
        Ok(())
    }
}

/// Admin check response
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

fn require_credentials(email: &str, password: &str) -> Result<(), SharedError> {
    if email.is_empty() {
        return Err(SharedError::validation("email", "email is required"));
    }
    if password.is_empty() {
        return Err(SharedError::validation("password", "password is required"));
    }
    Ok(())
}
