//! Business partner service

use std::sync::Arc;

use shared::PaginatedResponse;
use shared::models::{BusinessPartner, BusinessPartnerCreate, BusinessPartnerType};

use super::master_id::{IdAllocator, MasterIdAllocator, create_partner_with_retry};
use crate::db::repository::BusinessPartnerRepository;
use crate::utils::pagination::PageRequest;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct BusinessPartnerService {
    partners: Arc<dyn BusinessPartnerRepository>,
    allocator: Arc<dyn IdAllocator>,
    max_retries: u32,
}

impl BusinessPartnerService {
    pub fn new(partners: Arc<dyn BusinessPartnerRepository>, max_retries: u32) -> Self {
        let allocator = Arc::new(MasterIdAllocator::new(partners.clone()));
        Self {
            partners,
            allocator,
            max_retries,
        }
    }

    /// Preview of the next master id (not reserved)
    pub async fn next_master_id(&self) -> AppResult<String> {
        self.allocator.next_id().await
    }

    /// Partner type taxonomy.
    ///
    /// Falls back to the built-in defaults only when the table cannot be read.
    pub async fn types(&self) -> Vec<BusinessPartnerType> {
        match self.partners.list_types().await {
            Ok(types) => types,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load business partner types, serving defaults");
                BusinessPartnerType::defaults()
            }
        }
    }

    pub async fn create(&self, payload: BusinessPartnerCreate) -> AppResult<BusinessPartner> {
        validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&payload.partner_type, "partner_type", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&payload.business_number, "business_number", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&payload.representative, "representative", MAX_NAME_LEN)?;
        validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;

        let types = self.types().await;
        if !types.iter().any(|t| t.code == payload.partner_type) {
            let allowed: Vec<&str> = types.iter().map(|t| t.code.as_str()).collect();
            return Err(AppError::with_message(
                ErrorCode::BusinessPartnerTypeInvalid,
                format!(
                    "Unknown partner_type '{}', expected one of: {}",
                    payload.partner_type,
                    allowed.join(", ")
                ),
            ));
        }

        create_partner_with_retry(
            self.allocator.as_ref(),
            self.partners.as_ref(),
            &payload,
            self.max_retries,
        )
        .await
    }

    pub async fn get(&self, id: i64) -> AppResult<BusinessPartner> {
        self.partners.find_by_id(id).await?.ok_or_else(|| {
            AppError::new(ErrorCode::BusinessPartnerNotFound).with_detail("id", id)
        })
    }

    pub async fn list(
        &self,
        partner_type: Option<&str>,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<BusinessPartner>> {
        let (rows, total) = self
            .partners
            .list(partner_type, page.limit_i64(), page.offset())
            .await?;
        Ok(PaginatedResponse::new(
            rows,
            page.page,
            page.limit,
            u64::try_from(total).unwrap_or(0),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::db::repository::{RepoError, RepoResult};
    use async_trait::async_trait;

    fn payload(partner_type: &str, name: &str) -> BusinessPartnerCreate {
        BusinessPartnerCreate {
            partner_type: partner_type.into(),
            name: name.into(),
            business_number: Some("123-45-67890".into()),
            representative: None,
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_create_allocates_sequential_ids() {
        let service = BusinessPartnerService::new(Arc::new(MemoryStore::new()), 3);
        let a = service.create(payload("SUPPLIER", "A")).await.unwrap();
        let b = service.create(payload("SHOP", "B")).await.unwrap();
        assert_eq!(a.master_id, "PTN000001");
        assert_eq!(b.master_id, "PTN000002");
        assert_eq!(service.next_master_id().await.unwrap(), "PTN000003");
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_type() {
        let service = BusinessPartnerService::new(Arc::new(MemoryStore::new()), 3);
        let err = service.create(payload("VENDOR", "A")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessPartnerTypeInvalid);

        let err = service.create(payload("SHOP", "  ")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_types_from_table() {
        let store = Arc::new(MemoryStore::new());
        store.set_partner_types(vec![BusinessPartnerType {
            id: 9,
            code: "LOGISTICS".into(),
            name: "물류".into(),
        }]);
        let service = BusinessPartnerService::new(store, 3);
        let types = service.types().await;
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].code, "LOGISTICS");
    }

    #[tokio::test]
    async fn test_empty_type_table_served_as_is() {
        let store = Arc::new(MemoryStore::new());
        store.set_partner_types(Vec::new());
        let service = BusinessPartnerService::new(store, 3);
        assert!(service.types().await.is_empty());

        let err = service
            .create(BusinessPartnerCreate {
                partner_type: "SUPPLIER".into(),
                name: "동원상사".into(),
                business_number: None,
                representative: None,
                phone: None,
                address: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessPartnerTypeInvalid);
    }

    /// Type table that cannot be read
    struct BrokenTypes(MemoryStore);

    #[async_trait]
    impl BusinessPartnerRepository for BrokenTypes {
        async fn master_ids_with_prefix(&self, prefix: &str) -> RepoResult<Vec<String>> {
            self.0.master_ids_with_prefix(prefix).await
        }
        async fn create(
            &self,
            master_id: &str,
            data: &BusinessPartnerCreate,
            now: i64,
        ) -> RepoResult<BusinessPartner> {
            BusinessPartnerRepository::create(&self.0, master_id, data, now).await
        }
        async fn find_by_id(&self, id: i64) -> RepoResult<Option<BusinessPartner>> {
            BusinessPartnerRepository::find_by_id(&self.0, id).await
        }
        async fn list(
            &self,
            partner_type: Option<&str>,
            limit: i64,
            offset: i64,
        ) -> RepoResult<(Vec<BusinessPartner>, i64)> {
            BusinessPartnerRepository::list(&self.0, partner_type, limit, offset).await
        }
        async fn list_types(&self) -> RepoResult<Vec<BusinessPartnerType>> {
            Err(RepoError::Database("relation does not exist".into()))
        }
    }

    #[tokio::test]
    async fn test_types_fallback_on_error() {
        let service = BusinessPartnerService::new(Arc::new(BrokenTypes(MemoryStore::new())), 3);
        let codes: Vec<String> = service.types().await.into_iter().map(|t| t.code).collect();
        assert_eq!(codes, ["HEADQUARTERS", "FRANCHISE", "SHOP", "SUPPLIER"]);

        // creation keeps working against the default taxonomy
        let created = service.create(payload("FRANCHISE", "A")).await.unwrap();
        assert_eq!(created.master_id, "PTN000001");
    }

    #[tokio::test]
    async fn test_get_and_list() {
        let service = BusinessPartnerService::new(Arc::new(MemoryStore::new()), 3);
        for name in ["A", "B", "C"] {
            service.create(payload("SUPPLIER", name)).await.unwrap();
        }
        service.create(payload("SHOP", "D")).await.unwrap();

        let page = PageRequest { page: 1, limit: 2 };
        let listed = service.list(Some("SUPPLIER"), page).await.unwrap();
        assert_eq!(listed.data.len(), 2);
        assert_eq!(listed.pagination.total, 3);
        assert_eq!(listed.pagination.total_pages, 2);

        let first = &listed.data[0];
        assert_eq!(service.get(first.id).await.unwrap().name, first.name);
        let err = service.get(9999).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessPartnerNotFound);
    }
}
