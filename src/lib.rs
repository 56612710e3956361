//! SSO - Single Sign-On Authentication Service
//!
//! Registers users, verifies their credentials and issues signed session
//! tokens on behalf of client applications, and answers admin-privilege
//! queries.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain records, configuration, validation errors
//!
//! - **`backend`** - Everything that runs in the server
//!   - `AuthService`: login, registration, admin check
//!   - bcrypt password hashing and JWT issuance
//!   - SQLite storage
//!   - Axum HTTP server
//!
//! # Tokens
//!
//! A successful login returns an HS256 JWT signed with the secret of the
//! application named in the request. Claims: `user_id`, `email`, `app_id`,
//! `iat`, `exp`. Only holders of that application's secret can verify it;
//! see [`backend::auth::decode_claims`].
//!
//! # Binaries
//!
//! - `sso` - the HTTP server (`--config` or `CONFIG_PATH`)
//! - `sso-migrator` - applies a directory of SQL migrations to a database
//!
//! # Error Handling
//!
//! - `AuthError` for outcomes of the authentication service
//! - `StorageError`, `PasswordError`, `TokenError` for the layers below it
//! - `BackendError` for HTTP responses
//! - `ConfigError` and `InitError` for startup

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
