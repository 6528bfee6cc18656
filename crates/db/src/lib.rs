//! PostgreSQL-backed document store for the portfolio service.
//!
//! Each [`Collection`] is a table of JSONB documents; [`DocumentStore`]
//! inserts into any of them, and the repositories read them back.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod collection;
pub mod diagnostics;
pub mod models;
pub mod repositories;
pub mod store;

pub use collection::{Collection, Document};
pub use store::DocumentStore;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
///
/// Connections are opened on first use, so an unreachable server does not
/// prevent startup; it surfaces on the first query instead. Only a malformed
/// URL fails here.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
}

/// Run a trivial query to confirm the database answers.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
