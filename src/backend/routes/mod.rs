//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and middleware layers
//! └── api_routes.rs   - Authentication API endpoints
//! ```
//!
//! # Routes
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - Token issuance
//! - `POST /api/auth/is-admin` - Privilege check
//! - `GET /health` - Liveness probe
//!
//! Anything else falls through to a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
