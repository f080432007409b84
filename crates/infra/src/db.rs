//! Postgres pool + migrations wiring.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::{StoreError, StoreResult};

/// Connect and bring the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(|e| StoreError::Database(format!("failed to connect to Postgres: {e}")))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| StoreError::Database(format!("migration failed: {e}")))?;

    tracing::info!(max_connections, "connected to Postgres and applied migrations");
    Ok(pool)
}
