/**
 * Server Initialization
 *
 * This module wires the service together and runs it.
 *
 * # Initialization Process
 *
 * 1. Open storage and apply migrations
 * 2. Build the password hasher at the configured cost
 * 3. Build `AuthService` over the storage capabilities
 * 4. Create the router
 * 5. Bind the listener and serve until SIGINT or SIGTERM
 *
 * Every step that can fail returns an `InitError`; `main` decides what to
 * do with it.
 */

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{AuthService, PasswordError, PasswordHasher};
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_storage;
use crate::backend::server::state::AppState;
use crate::backend::storage::{SqliteStorage, StorageError};
use crate::shared::{AppConfig, ConfigError};

/// Startup errors
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("password hasher error: {0}")]
    Password(#[from] PasswordError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the authentication service over SQLite storage
pub fn build_auth_service(
    storage: &SqliteStorage,
    config: &AppConfig,
) -> Result<AuthService, InitError> {
    let hasher = PasswordHasher::new(config.bcrypt_cost)?;
    let storage = Arc::new(storage.clone());

    Ok(AuthService::new(
        storage.clone(),
        storage.clone(),
        storage,
        hasher,
        config.token_ttl(),
    ))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The router and the storage handle, so the caller can close the pool on
/// shutdown.
pub async fn create_app(config: &AppConfig) -> Result<(Router<()>, SqliteStorage), InitError> {
    tracing::info!("Initializing SSO server");

    let storage = load_storage(config).await?;
    let auth = build_auth_service(&storage, config)?;

    let app = create_router(AppState::new(auth), &config.http);

    tracing::info!("Router configured");

    Ok((app, storage))
}

/// Run the server until a shutdown signal arrives
pub async fn run(config: AppConfig) -> Result<(), InitError> {
    let (app, storage) = create_app(&config).await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(addr = %local_addr, "HTTP server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HTTP server stopped, closing storage");
    storage.close().await;

    Ok(())
}

/// Resolve when SIGINT (Ctrl-C) or, on Unix, SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = ctrl_c_or_pending(tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}

/// Wait for a Ctrl-C listener; if it cannot be installed, never resolve
async fn ctrl_c_or_pending<F>(listener: F)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = listener.await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
