//! Backend Error Module
//!
//! This module defines the error type returned by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Errors raised by the HTTP layer itself
//! - `Validation` - Rejected request fields
//! - `Auth` - Outcomes of the authentication service

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
