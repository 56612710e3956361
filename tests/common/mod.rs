//! Common test utilities and helpers
//!
//! This module provides shared utilities for the integration tests:
//! - Database fixtures (temporary SQLite file with a provisioned app)
//! - HTTP helpers for driving the router without a socket
#![allow(dead_code)]

pub mod database;
pub mod http;

// Re-export commonly used utilities
pub use database::*;
pub use http::*;
