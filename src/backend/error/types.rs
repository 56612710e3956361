/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers and how each
 * failure maps onto a status code and a client-facing message.
 *
 * # Error Categories
 *
 * ## Validation Errors
 *
 * A request field is missing or out of range. 400, with the validation
 * message.
 *
 * ## Authentication Errors
 *
 * Outcomes of `AuthService`. Business outcomes get a fixed message per
 * variant; internal failures get a 500 and the generic "internal error"
 * text, never the underlying cause.
 *
 * ## Handler Errors
 *
 * Ad hoc failures raised by the HTTP layer itself, with an explicit status.
 * Rejected JSON bodies (wrong content type, malformed JSON, wrong field
 * types) land here as a 400 with a fixed message; the parser's detail is
 * logged, not returned.
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::AuthError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Request validation failed
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Authentication service error
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Validation` - 400 Bad Request
    /// - `Auth(InvalidCredentials)` - 401 Unauthorized
    /// - `Auth(UserAlreadyExists)` - 409 Conflict
    /// - `Auth(UserNotFound)`, `Auth(InvalidAppId)` - 400 Bad Request
    /// - `Auth(Internal)` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::UserNotFound | AuthError::InvalidAppId => StatusCode::BAD_REQUEST,
                AuthError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Get the message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Validation(err) => err.message().to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "invalid email or password",
                AuthError::UserAlreadyExists => "user already exists",
                AuthError::UserNotFound => "user not found",
                AuthError::InvalidAppId => "invalid app_id",
                AuthError::Internal { .. } => "internal error",
            }
            .to_string(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "rejected request body");

        let message = match rejection {
            JsonRejection::MissingJsonContentType(_) => "expected an application/json body",
            JsonRejection::JsonSyntaxError(_) => "malformed JSON body",
            JsonRejection::JsonDataError(_) => "invalid request body",
            _ => "failed to read request body",
        };

        Self::handler(StatusCode::BAD_REQUEST, message)
    }
}
