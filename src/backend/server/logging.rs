/**
 * Logging Setup
 *
 * Installs the global `tracing` subscriber. The format and default level
 * follow the deployment environment:
 *
 * - `local` - human-readable, DEBUG
 * - `dev` - JSON, DEBUG
 * - `prod` - JSON, INFO
 *
 * `RUST_LOG`, when set, replaces the default level filter.
 */

use tracing_subscriber::EnvFilter;

use crate::shared::Env;

/// Default filter directive for an environment
pub fn default_directive(env: Env) -> &'static str {
    match env {
        Env::Local | Env::Dev => "debug",
        Env::Prod => "info",
    }
}

/// Install the global subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(env: Env) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let result = match env {
        Env::Local => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        Env::Dev | Env::Prod => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("[STARTUP] Tracing already initialized: {}", e);
    }
}
