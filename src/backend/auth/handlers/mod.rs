//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Each handler validates its request, calls `AuthService`, and lets
//! `BackendError` turn failures into responses.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! └── is_admin.rs - Admin check handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - Token issuance
//! - **`is_admin`** - POST /api/auth/is-admin - Privilege check

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Admin check handler
pub mod is_admin;

// Re-export commonly used types
pub use types::{
    IsAdminRequest, IsAdminResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse,
};

// Re-export handlers
pub use is_admin::is_admin;
pub use login::login;
pub use register::register;
