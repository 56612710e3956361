/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate that email, password and app_id are present
 * 2. Delegate to `AuthService::login`
 * 3. Return the signed token
 *
 * # Security
 *
 * - Unknown email and wrong password both return 401 with the same body
 * - Infrastructure failures return 500 without detail
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - unreadable JSON body, missing field, or unknown `app_id`
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - storage, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "app_id": 1
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let token = auth
        .login(&request.email, &request.password, request.app_id)
        .await?;

    Ok(Json(LoginResponse { token }))
}
