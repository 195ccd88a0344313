//! # Libris DB
//!
//! PostgreSQL connection pool and schema migrations for the Libris API.
//!
//! # Example
//!
//! ```ignore
//! use libris_config::StoreConfig;
//! use libris_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&StoreConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! ```

use anyhow::Context;
use libris_config::StoreConfig;
use sqlx::postgres::PgPoolOptions;

pub use sqlx::PgPool;

/// Connects a PostgreSQL pool using `DATABASE_URL` from `config`.
///
/// The pool is cheaply cloneable and shared by every request.
///
/// # Errors
///
/// Fails if `DATABASE_URL` is unset or the first connection cannot be made.
pub async fn init_db_pool(config: &StoreConfig) -> anyhow::Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!(max_connections = config.max_connections, "Database pool ready");

    Ok(pool)
}

/// Applies the migrations embedded from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database migrations applied");

    Ok(())
}
