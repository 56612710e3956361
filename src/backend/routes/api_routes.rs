/**
 * API Route Handlers
 *
 * This module wires the authentication endpoints into the router.
 *
 * # Routes
 *
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login, returns a token for one application
 * - `POST /api/auth/is-admin` - Whether a user is an administrator
 *
 * All three are public: callers authenticate by presenting credentials,
 * not tokens.
 */

use axum::{routing::post, Router};

use crate::backend::auth::{is_admin, login, register};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/is-admin", post(is_admin))
}
