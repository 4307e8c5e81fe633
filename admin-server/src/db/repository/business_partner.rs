//! Business Partner Repository

use async_trait::async_trait;
use shared::models::{BusinessPartner, BusinessPartnerCreate, BusinessPartnerType};
use sqlx::PgPool;

use super::RepoResult;

#[async_trait]
pub trait BusinessPartnerRepository: Send + Sync {
    /// Every master id starting with `prefix`
    async fn master_ids_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>>;

    /// Insert with a pre-allocated master id; `Duplicate` when it is taken
    async fn create(
        &self,
        master_id: &str,
        data: &BusinessPartnerCreate,
        now: i64,
    ) -> RepoResult<BusinessPartner>;

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BusinessPartner>>;

    /// One page ordered by master id plus the total match count
    async fn list(
        &self,
        partner_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<BusinessPartner>, i64)>;

    async fn list_types(&self) -> RepoResult<Vec<BusinessPartnerType>>;
}

#[derive(Clone)]
pub struct PgBusinessPartnerRepository {
    pool: PgPool,
}

impl PgBusinessPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BusinessPartnerRepository for PgBusinessPartnerRepository {
    async fn master_ids_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>> {
        let ids = sqlx::query_scalar(
            "SELECT master_id FROM business_partners WHERE starts_with(master_id, $1)",
        )
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;
        Ok(ids)
    }

    async fn create(
        &self,
        master_id: &str,
        data: &BusinessPartnerCreate,
        now: i64,
    ) -> RepoResult<BusinessPartner> {
        let row = sqlx::query_as(
            "INSERT INTO business_partners (
                master_id, partner_type, name, business_number,
                representative, phone, address, created_at, updated_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING *",
        )
        .bind(master_id)
        .bind(&data.partner_type)
        .bind(&data.name)
        .bind(&data.business_number)
        .bind(&data.representative)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<BusinessPartner>> {
        let row = sqlx::query_as("SELECT * FROM business_partners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list(
        &self,
        partner_type: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> RepoResult<(Vec<BusinessPartner>, i64)> {
        let rows = sqlx::query_as(
            "SELECT * FROM business_partners
             WHERE ($1::TEXT IS NULL OR partner_type = $1)
             ORDER BY master_id
             LIMIT $2 OFFSET $3",
        )
        .bind(partner_type)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let (total,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM business_partners WHERE ($1::TEXT IS NULL OR partner_type = $1)",
        )
        .bind(partner_type)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows, total))
    }

    async fn list_types(&self) -> RepoResult<Vec<BusinessPartnerType>> {
        let rows = sqlx::query_as("SELECT id, code, name FROM business_partner_types ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
