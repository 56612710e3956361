/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate that email and password are present
 * 2. Delegate to `AuthService::register_user` (hash, then insert)
 * 3. Return the new user's id
 *
 * Registration does not log the user in; clients call login afterwards
 * with the application they want a token for.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{RegisterRequest, RegisterResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - unreadable JSON body, missing email or password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "user_id": 1
/// }
/// ```
pub async fn register(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let user_id = auth.register_user(&request.email, &request.password).await?;

    Ok(Json(RegisterResponse { user_id }))
}
