/**
 * SQLite Storage
 *
 * This module persists users and applications in a SQLite database through
 * a `sqlx` connection pool.
 *
 * # Tables
 *
 * - `users(id, email, pass_hash, is_admin)` - email is UNIQUE
 * - `apps(id, name, secret)` - provisioned out of band
 *
 * The schema lives in `./migrations` and is embedded into the binary;
 * `SqliteStorage::migrate` applies it.
 */
use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::backend::storage::{AppProvider, StorageError, UserProvider, UserSaver};
use crate::shared::{App, User};

/// SQLite-backed storage
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open the database at `path`, creating the file if it is missing
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Database` if the file cannot be opened.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Opening SQLite storage");

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        tracing::info!("SQLite connection pool created successfully");
        Ok(Self { pool })
    }

    /// Underlying connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), StorageError> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UserSaver for SqliteStorage {
    async fn save_user(&self, email: &str, pass_hash: &[u8]) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO users (email, pass_hash) VALUES ($1, $2)")
            .bind(email)
            .bind(pass_hash)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.last_insert_rowid()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StorageError::UserExists)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UserProvider for SqliteStorage {
    async fn user(&self, email: &str) -> Result<User, StorageError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, pass_hash, is_admin
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::UserNotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, StorageError> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::UserNotFound)
    }
}

#[async_trait]
impl AppProvider for SqliteStorage {
    async fn app(&self, app_id: i64) -> Result<App, StorageError> {
        sqlx::query_as::<_, App>("SELECT id, name, secret FROM apps WHERE id = $1")
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::AppNotFound)
    }
}
