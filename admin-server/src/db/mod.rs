//! Database Module
//!
//! PostgreSQL connection + migrations, repository traits and the in-memory
//! store used when no database is configured.

pub mod memory;
pub mod repository;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::core::error::Result;

/// Connect to PostgreSQL and apply pending migrations
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!(max_connections, "Database connected, migrations applied");

    Ok(pool)
}
