//! Shared Module
//!
//! Types used on both sides of the service boundary: the domain records
//! persisted by storage, the process configuration, and request validation
//! errors.

/// User and application records
pub mod models;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{App, User};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Env, HttpConfig};
