//! Database test fixtures
//!
//! Each fixture owns a temporary directory holding a fresh, migrated SQLite
//! database with one application provisioned.

use std::time::Duration;

use sso::backend::server::build_auth_service;
use sso::backend::storage::SqliteStorage;
use sso::backend::AuthService;
use sso::shared::AppConfig;
use tempfile::TempDir;

/// Application provisioned in every fixture
pub const APP_ID: i64 = 1;
pub const APP_SECRET: &str = "watermelon";

/// Token lifetime used by fixtures
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Test database fixture
///
/// The database file is removed when the fixture is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pub config: AppConfig,
    pub storage: SqliteStorage,
}

impl TestDatabase {
    /// Create a migrated database with the test application inserted
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let config = AppConfig::builder()
            .storage_path(dir.path().join("sso.db"))
            .token_ttl(TOKEN_TTL)
            .bcrypt_cost(4)
            .build()
            .expect("Failed to build test config");

        let storage = SqliteStorage::connect(&config.storage_path)
            .await
            .expect("Failed to open test database");
        storage.migrate().await.expect("Failed to run migrations");

        insert_app(&storage, APP_ID, "test", APP_SECRET).await;

        Self {
            _dir: dir,
            config,
            storage,
        }
    }

    /// Authentication service over this database
    pub fn auth_service(&self) -> AuthService {
        build_auth_service(&self.storage, &self.config).expect("Failed to build auth service")
    }
}

/// Provision an application
pub async fn insert_app(storage: &SqliteStorage, id: i64, name: &str, secret: &str) {
    sqlx::query("INSERT INTO apps (id, name, secret) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(secret)
        .execute(storage.pool())
        .await
        .expect("Failed to insert test app");
}

/// Grant administrator privileges
pub async fn make_admin(storage: &SqliteStorage, user_id: i64) {
    sqlx::query("UPDATE users SET is_admin = TRUE WHERE id = $1")
        .bind(user_id)
        .execute(storage.pool())
        .await
        .expect("Failed to promote test user");
}

/// Email unique within a test run
pub fn unique_email() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT: AtomicU64 = AtomicU64::new(1);
    format!("user{}@example.com", NEXT.fetch_add(1, Ordering::Relaxed))
}
