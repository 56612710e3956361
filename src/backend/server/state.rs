/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` trait for Axum state extraction.
 *
 * # Thread Safety
 *
 * `AuthService` holds no mutable state, so it is shared behind a plain
 * `Arc` with no lock. Every request gets a cheap clone.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::AuthService;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth: Arc<AuthService>,
}

impl AppState {
    pub fn new(auth: AuthService) -> Self {
        Self {
            auth: Arc::new(auth),
        }
    }
}

/// Lets handlers extract `State<Arc<AuthService>>` directly
impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
