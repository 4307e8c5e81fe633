//! Order Repository (read-only)

use async_trait::async_trait;
use shared::models::Order;
use sqlx::PgPool;

use super::RepoResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Orders of a store created within `[start, end]` (both inclusive, millis)
    async fn find_in_range(&self, store_id: i64, start: i64, end: i64) -> RepoResult<Vec<Order>>;
}

#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_in_range(&self, store_id: i64, start: i64, end: i64) -> RepoResult<Vec<Order>> {
        let rows = sqlx::query_as(
            "SELECT id, store_id, final_amount, payment_type, created_at FROM orders
             WHERE store_id = $1 AND created_at >= $2 AND created_at <= $3
             ORDER BY created_at",
        )
        .bind(store_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
