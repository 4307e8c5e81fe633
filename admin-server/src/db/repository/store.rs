//! Store Repository

use async_trait::async_trait;
use shared::models::Store;
use sqlx::PgPool;

use super::RepoResult;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn find_by_id(&self, store_id: i64) -> RepoResult<Option<Store>>;

    /// Round-trip to the backing store, used by the health check
    async fn ping(&self) -> RepoResult<()>;
}

#[derive(Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn find_by_id(&self, store_id: i64) -> RepoResult<Option<Store>> {
        let row = sqlx::query_as("SELECT * FROM stores WHERE id = $1")
            .bind(store_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
