/**
 * Storage Configuration
 *
 * This module opens the SQLite database named in the configuration and
 * brings its schema up to date.
 *
 * # Error Handling
 *
 * Failures are returned to the caller. The server does not start without
 * storage: every operation it offers needs it.
 */

use crate::backend::storage::{SqliteStorage, StorageError};
use crate::shared::AppConfig;

/// Open storage and run migrations
///
/// This function:
/// 1. Opens (or creates) the database at `config.storage_path`
/// 2. Runs the embedded database migrations
///
/// # Errors
///
/// * `StorageError::Database` - if the database cannot be opened
/// * `StorageError::Migrate` - if a migration fails
pub async fn load_storage(config: &AppConfig) -> Result<SqliteStorage, StorageError> {
    if let Some(parent) = config.storage_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tracing::info!(dir = %parent.display(), "Creating storage directory");
            std::fs::create_dir_all(parent).map_err(sqlx::Error::Io)?;
        }
    }

    let storage = SqliteStorage::connect(&config.storage_path).await?;
    storage.migrate().await?;

    Ok(storage)
}
