/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Requests pass through, outermost first:
 * 1. `TraceLayer` - one span per request, with method, path and status
 * 2. `TimeoutLayer` - aborts the request (408) once the configured timeout
 *    elapses; dropping the handler future cancels pending storage calls
 */

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::HttpConfig;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the authentication service
/// * `http` - Listener settings; only the timeout is read here
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState, http: &HttpConfig) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.timeout(),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "not found")
}
