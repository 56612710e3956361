//! Storage Module
//!
//! Capabilities the authentication service needs from persistence, and the
//! SQLite adapter that provides them.
//!
//! # Capabilities
//!
//! - **`UserSaver`** - create a user from an email and a password hash
//! - **`UserProvider`** - look a user up by email, read the admin flag by id
//! - **`AppProvider`** - look an application up by id
//!
//! The service holds each capability as a trait object, so tests can swap
//! in an in-memory implementation and a deployment can wrap the SQLite
//! adapter without touching the service.
//!
//! # Not-found Signals
//!
//! Missing records are reported as dedicated `StorageError` variants rather
//! than `Option`, so the service can tell "absent" apart from "storage is
//! broken" with a single `match`.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{App, User};

/// SQLite implementation of the storage capabilities
pub mod sqlite;

pub use sqlite::SqliteStorage;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// A user with this email is already registered
    #[error("user already exists")]
    UserExists,

    /// No user matches the lookup key
    #[error("user not found")]
    UserNotFound,

    /// No application matches the id
    #[error("app not found")]
    AppNotFound,

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Creates user records
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Insert a user and return the assigned id
    ///
    /// Fails with `StorageError::UserExists` when the email is taken.
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<i64, StorageError>;
}

/// Reads user records
#[async_trait]
pub trait UserProvider: Send + Sync {
    /// Find a user by email, or `StorageError::UserNotFound`
    async fn user(&self, email: &str) -> Result<User, StorageError>;

    /// Read the admin flag of a user, or `StorageError::UserNotFound`
    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError>;
}

/// Reads application records
#[async_trait]
pub trait AppProvider: Send + Sync {
    /// Find an application by id, or `StorageError::AppNotFound`
    async fn app(&self, app_id: i64) -> Result<App, StorageError>;
}
