//! Authentication Module
//!
//! This module handles user registration, credential verification, token
//! issuance and the admin check.
//!
//! # Architecture
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance (and decoding for relying applications)
//! - **`service`** - `AuthService`, which orders the steps of each operation
//! - **`errors`** - `AuthError`, the taxonomy `AuthService` returns
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - Authentication service
//! ├── errors.rs       - Authentication errors
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── is_admin.rs - Admin check handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → password hashed → user stored → id returned
//! 2. **Login**: email + password + app id → password verified → token signed with the app's secret
//! 3. **Is Admin**: user id → admin flag
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are signed per application; only that application can verify them
//! - Tokens expire after the configured TTL and cannot be revoked
//! - Unknown email and wrong password are indistinguishable to the caller

/// Password hashing
pub mod password;

/// JWT token generation
pub mod sessions;

/// Authentication errors
pub mod errors;

/// Authentication service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use errors::AuthError;
pub use handlers::{is_admin, login, register};
pub use password::{PasswordError, PasswordHasher};
pub use service::AuthService;
pub use sessions::{create_token, decode_claims, Claims, TokenError};
