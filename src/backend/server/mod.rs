//! Server Module
//!
//! This module initializes and runs the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Storage loading
//! ├── logging.rs      - tracing subscriber setup
//! └── init.rs         - Service wiring, serving, graceful shutdown
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `main` reads the TOML file
//! 2. **Logging**: subscriber installed for the configured environment
//! 3. **Storage**: SQLite opened and migrated
//! 4. **Service**: `AuthService` built over the storage capabilities
//! 5. **Router Creation**: routes and middleware configured
//! 6. **Serve**: until SIGINT/SIGTERM, then drain and close storage

/// Application state management
pub mod state;

/// Storage loading
pub mod config;

/// Logging setup
pub mod logging;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::{build_auth_service, create_app, run, InitError};
pub use logging::init_tracing;
pub use state::AppState;
