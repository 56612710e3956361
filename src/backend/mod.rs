//! Backend Module
//!
//! This module contains all server-side code for the SSO service: the
//! authentication core, its SQLite storage, and the Axum HTTP server that
//! exposes it.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, token issuance, `AuthService`, HTTP handlers
//! - **`storage`** - Storage capability traits and the SQLite adapter
//! - **`server`** - Initialization, application state, logging, shutdown
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`error`** - Handler error type and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `sso` binary
//! ├── migrator.rs     - `sso-migrator` binary
//! ├── auth/           - Authentication
//! ├── storage/        - Persistence
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! HTTP request
//!   → TraceLayer → TimeoutLayer
//!   → handler (validates input)
//!   → AuthService (storage, hasher, token issuer)
//!   → JSON response, or BackendError → JSON error
//! ```
//!
//! # Thread Safety
//!
//! `AuthService` owns no mutable state and is shared through `Arc`. The
//! SQLite pool handles concurrent access to the database. bcrypt runs on
//! Tokio's blocking pool so slow hashes do not stall other requests.

/// Authentication and token issuance
pub mod auth;

/// Persistence
pub mod storage;

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use auth::{AuthError, AuthService};
pub use error::BackendError;
pub use server::create_app;
pub use storage::SqliteStorage;
