//! Read-only probes used by the diagnostics endpoint.

use sqlx::PgPool;

/// Name of the database the pool is connected to.
pub async fn database_name(pool: &PgPool) -> Result<String, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT current_database()::text")
        .fetch_one(pool)
        .await
}

/// Tables in the current schema, alphabetically, excluding migration
/// bookkeeping. At most `limit` names are returned.
pub async fn list_collections(pool: &PgPool, limit: i64) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = current_schema() \
           AND table_type = 'BASE TABLE' \
           AND table_name <> '_sqlx_migrations' \
         ORDER BY table_name \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
