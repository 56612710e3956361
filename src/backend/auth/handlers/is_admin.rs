/**
 * Admin Check Handler
 *
 * POST /api/auth/is-admin: reports whether a user holds administrator
 * privileges. Relying applications call it after verifying a token to
 * decide on privileged actions.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{IsAdminRequest, IsAdminResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Admin check handler
///
/// # Errors
///
/// * `400 Bad Request` - unreadable JSON body, missing `user_id`, or no such user
/// * `500 Internal Server Error` - storage failure
pub async fn is_admin(
    State(auth): State<Arc<AuthService>>,
    payload: Result<Json<IsAdminRequest>, JsonRejection>,
) -> Result<Json<IsAdminResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let is_admin = auth.is_admin(request.user_id).await?;

    Ok(Json(IsAdminResponse { is_admin }))
}
