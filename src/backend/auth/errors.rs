/**
 * Authentication Errors
 *
 * The error taxonomy returned by `AuthService`. The first four variants are
 * business outcomes the caller can act on; `Internal` covers every
 * infrastructure failure and keeps its cause for logging only.
 */
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by the authentication service
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password; the two are not distinguished
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Registration with an email that is already taken
    #[error("user already exists")]
    UserAlreadyExists,

    /// The referenced user id does not exist
    #[error("user not found")]
    UserNotFound,

    /// The referenced application id does not exist
    #[error("invalid app id")]
    InvalidAppId,

    /// Storage outage, hashing failure, signing failure
    #[error("{op}: {source}")]
    Internal {
        /// Operation that failed, e.g. `auth.login`
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AuthError {
    /// Wrap an infrastructure failure
    pub fn internal(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            op,
            source: source.into(),
        }
    }

    /// Whether this is an infrastructure failure rather than a business outcome
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
