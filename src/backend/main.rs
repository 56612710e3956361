/**
 * SSO Server Entry Point
 *
 * Loads the configuration, installs logging, and runs the HTTP server.
 *
 * The configuration path comes from `--config` or `CONFIG_PATH`:
 *
 * ```text
 * sso --config ./config/local.toml
 * CONFIG_PATH=./config/local.toml sso
 * ```
 */
use std::path::PathBuf;

use clap::Parser;

use sso::backend::server::{init_tracing, run};
use sso::shared::{AppConfig, ConfigError};

/// Single sign-on authentication server
#[derive(Debug, Parser)]
#[command(name = "sso", version, about)]
struct Args {
    /// Path to the TOML configuration file
    #[arg(long, env = "CONFIG_PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let path = args
        .config
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigError::MissingPath)?;
    let config = AppConfig::load(&path)?;

    init_tracing(config.env);
    tracing::info!(env = ?config.env, config = %path.display(), "App started");

    run(config).await?;

    Ok(())
}
