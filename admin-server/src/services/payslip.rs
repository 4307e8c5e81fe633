//! Payslip reads and email status tracking

use std::sync::Arc;

use shared::PaginatedResponse;
use shared::models::{EmailStatus, Payslip, PayslipFilter};
use shared::util::now_millis;

use crate::db::repository::PayslipRepository;
use crate::utils::pagination::PageRequest;
use crate::utils::validation::{parse_enum, require};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct PayslipService {
    payslips: Arc<dyn PayslipRepository>,
}

fn payslip_not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::PayslipNotFound).with_detail("id", id)
}

impl PayslipService {
    pub fn new(payslips: Arc<dyn PayslipRepository>) -> Self {
        Self { payslips }
    }

    pub async fn get(&self, id: i64) -> AppResult<Payslip> {
        self.payslips
            .find_by_id(id)
            .await?
            .ok_or_else(|| payslip_not_found(id))
    }

    pub async fn list(
        &self,
        filter: PayslipFilter,
        page: PageRequest,
    ) -> AppResult<PaginatedResponse<Payslip>> {
        let (rows, total) = self
            .payslips
            .list(&filter, page.limit_i64(), page.offset())
            .await?;
        Ok(PaginatedResponse::new(
            rows,
            page.page,
            page.limit,
            u64::try_from(total).unwrap_or(0),
        ))
    }

    /// Record an email delivery status.
    ///
    /// The value is checked before the payslip is looked up. Only `SENT`
    /// stamps `sent_at`; every other status leaves it untouched.
    pub async fn update_email_status(
        &self,
        id: i64,
        raw_status: Option<&str>,
    ) -> AppResult<Payslip> {
        let raw = require(raw_status, "email_status")?;
        let status: EmailStatus = parse_enum(raw, ErrorCode::PayslipEmailStatusInvalid)?;

        let now = now_millis();
        let sent_at = (status == EmailStatus::Sent).then_some(now);
        let payslip = self
            .payslips
            .update_email_status(id, status, sent_at, now)
            .await?
            .ok_or_else(|| payslip_not_found(id))?;

        tracing::info!(payslip_id = id, email_status = %status, "Payslip email status updated");
        Ok(payslip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use rust_decimal::Decimal;

    fn setup() -> (Arc<MemoryStore>, PayslipService) {
        let store = Arc::new(MemoryStore::new());
        (store.clone(), PayslipService::new(store))
    }

    #[tokio::test]
    async fn test_only_sent_stamps_sent_at() {
        let (store, service) = setup();
        let p = store.insert_payslip(1, 1, "2025-03", Decimal::from(3_000_000), Decimal::ZERO);

        for status in ["PENDING", "FAILED", "NOT_SENT"] {
            let updated = service.update_email_status(p.id, Some(status)).await.unwrap();
            assert_eq!(updated.email_status.as_str(), status);
            assert!(updated.sent_at.is_none());
        }

        let sent = service.update_email_status(p.id, Some("SENT")).await.unwrap();
        assert_eq!(sent.email_status, EmailStatus::Sent);
        let stamped = sent.sent_at.unwrap();

        // later statuses keep the original stamp
        let failed = service.update_email_status(p.id, Some("FAILED")).await.unwrap();
        assert_eq!(failed.sent_at, Some(stamped));
    }

    #[tokio::test]
    async fn test_invalid_status_checked_before_lookup() {
        let (_, service) = setup();
        let err = service
            .update_email_status(12345, Some("DELIVERED"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PayslipEmailStatusInvalid);

        let err = service.update_email_status(12345, None).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
    }

    #[tokio::test]
    async fn test_missing_payslip() {
        let (_, service) = setup();
        let err = service
            .update_email_status(12345, Some("SENT"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PayslipNotFound);
        assert_eq!(service.get(12345).await.unwrap_err().code, ErrorCode::PayslipNotFound);
    }

    #[tokio::test]
    async fn test_list_filters() {
        let (store, service) = setup();
        store.insert_payslip(1, 1, "2025-02", Decimal::from(100), Decimal::ZERO);
        store.insert_payslip(1, 1, "2025-03", Decimal::from(100), Decimal::ZERO);
        store.insert_payslip(2, 1, "2025-03", Decimal::from(100), Decimal::ZERO);

        let page = PageRequest { page: 1, limit: 10 };
        let filter = PayslipFilter {
            employee_id: Some(1),
            pay_period: None,
        };
        let listed = service.list(filter, page).await.unwrap();
        assert_eq!(listed.pagination.total, 2);
        assert_eq!(listed.data[0].pay_period, "2025-03");

        let filter = PayslipFilter {
            employee_id: None,
            pay_period: Some("2025-03".into()),
        };
        assert_eq!(service.list(filter, page).await.unwrap().pagination.total, 2);
    }
}
