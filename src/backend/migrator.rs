/**
 * Migration Runner
 *
 * Applies the SQL migrations in a directory to a SQLite database, creating
 * the database file if needed.
 *
 * ```text
 * sso-migrator --storage-path ./storage/sso.db --migrations-path ./migrations
 * ```
 *
 * The server applies its embedded migrations on startup as well; this
 * binary exists for applying extra migration sets (for example test
 * fixtures) and for preparing a database ahead of a deploy.
 */
use std::path::PathBuf;

use clap::Parser;
use sqlx::migrate::{Migrate, Migrator};

use sso::backend::storage::SqliteStorage;

/// Apply SQL migrations to the SSO database
#[derive(Debug, Parser)]
#[command(name = "sso-migrator", version, about)]
struct Args {
    /// Path to the SQLite database file
    #[arg(long)]
    storage_path: PathBuf,

    /// Directory containing `<version>_<name>.sql` migration files
    #[arg(long)]
    migrations_path: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut migrator = Migrator::new(args.migrations_path.as_path()).await?;
    // Versions applied from another directory (the server's own schema)
    // are expected and must not fail the run.
    migrator.set_ignore_missing(true);
    let storage = SqliteStorage::connect(&args.storage_path).await?;

    let applied_before = {
        let mut conn = storage.pool().acquire().await?;
        conn.ensure_migrations_table().await?;
        conn.list_applied_migrations().await?.len()
    };

    migrator.run(storage.pool()).await?;

    let applied_after = {
        let mut conn = storage.pool().acquire().await?;
        conn.list_applied_migrations().await?.len()
    };

    if applied_after == applied_before {
        tracing::info!("no migrations to apply");
    } else {
        tracing::info!(
            applied = applied_after - applied_before,
            "migrations applied successfully"
        );
    }

    storage.close().await;

    Ok(())
}
