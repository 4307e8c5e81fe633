//! 主编号分配 (PTN000001 ...)
//!
//! 编号不存计数器，每次读取时由已有编号推导: 取相同前缀的所有编号，
//! 解析数字后缀，取最大值 + 1 并补零。
//!
//! 读取和写入之间没有原子保留，两个并发调用可能得到同一个编号。
//! 写入端依赖 `master_id` 唯一索引，冲突时重新分配 (见 [`create_partner_with_retry`])。

use std::sync::Arc;

use async_trait::async_trait;
use shared::models::{BusinessPartner, BusinessPartnerCreate};
use shared::util::now_millis;

use crate::db::repository::{BusinessPartnerRepository, RepoError};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Business partner master id prefix
pub const MASTER_ID_PREFIX: &str = "PTN";
/// Zero-pad width of the numeric suffix
pub const MASTER_ID_WIDTH: usize = 6;

/// Compute the next identifier from the existing ones.
///
/// Identifiers without the prefix, with a non-numeric suffix, or whose suffix
/// cannot be incremented are skipped.
/// Suffixes wider than `width` are accepted and the sequence keeps growing.
pub fn next_master_id<S: AsRef<str>>(existing: &[S], prefix: &str, width: usize) -> String {
    let next = existing
        .iter()
        .filter_map(|id| {
            let id = id.as_ref();
            let suffix = id.strip_prefix(prefix)?;
            let parsed = match suffix.parse::<u64>() {
                Ok(n) if suffix.bytes().all(|b| b.is_ascii_digit()) => n,
                _ => {
                    tracing::warn!(master_id = %id, "Skipping master id with non-numeric suffix");
                    return None;
                }
            };
            let next = parsed.checked_add(1);
            if next.is_none() {
                tracing::warn!(master_id = %id, "Skipping master id with out-of-range suffix");
            }
            next
        })
        .max()
        .unwrap_or(1);

    format!("{prefix}{next:0width$}")
}

/// Allocates the next identifier of a sequence.
///
/// Not atomic: the value is derived from a read, and nothing is reserved.
/// Callers must write through a unique constraint and allocate again when
/// the write reports a duplicate.
#[async_trait]
pub trait IdAllocator: Send + Sync {
    async fn next_id(&self) -> AppResult<String>;
}

/// Repository-backed allocator for business partner master ids
#[derive(Clone)]
pub struct MasterIdAllocator {
    partners: Arc<dyn BusinessPartnerRepository>,
}

impl MasterIdAllocator {
    pub fn new(partners: Arc<dyn BusinessPartnerRepository>) -> Self {
        Self { partners }
    }
}

#[async_trait]
impl IdAllocator for MasterIdAllocator {
    async fn next_id(&self) -> AppResult<String> {
        let existing = self
            .partners
            .master_ids_with_prefix(MASTER_ID_PREFIX)
            .await?;
        Ok(next_master_id(&existing, MASTER_ID_PREFIX, MASTER_ID_WIDTH))
    }
}

/// Create a partner, allocating its master id and retrying on duplicates.
///
/// `max_retries` extra attempts are made after the first; when all of them
/// collide the request fails with `MasterIdConflict`.
pub async fn create_partner_with_retry(
    allocator: &dyn IdAllocator,
    partners: &dyn BusinessPartnerRepository,
    data: &BusinessPartnerCreate,
    max_retries: u32,
) -> AppResult<BusinessPartner> {
    for attempt in 0..=max_retries {
        let master_id = allocator.next_id().await?;
        match partners.create(&master_id, data, now_millis()).await {
            Ok(partner) => {
                tracing::info!(master_id = %partner.master_id, id = partner.id, "Business partner created");
                return Ok(partner);
            }
            Err(RepoError::Duplicate(_)) => {
                tracing::warn!(%master_id, attempt, "Master id taken concurrently, allocating again");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::new(ErrorCode::MasterIdConflict).with_detail("retries", max_retries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use parking_lot::Mutex;

    fn partner(name: &str) -> BusinessPartnerCreate {
        BusinessPartnerCreate {
            partner_type: "SUPPLIER".into(),
            name: name.into(),
            business_number: None,
            representative: None,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_next_after_existing_sequence() {
        let existing: Vec<String> = (1..=6).map(|n| format!("PTN{n:06}")).collect();
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN000007");
    }

    #[test]
    fn test_seed_when_empty() {
        let existing: Vec<String> = Vec::new();
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN000001");
    }

    #[test]
    fn test_non_numeric_suffix_ignored() {
        let existing = ["PTN000002", "PTNABC123", "PTN", "PTN-00009", "XYZ000050"];
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN000003");
    }

    #[test]
    fn test_gaps_are_not_filled() {
        let existing = ["PTN000001", "PTN000010"];
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN000011");
    }

    #[test]
    fn test_grows_past_width() {
        let existing = ["PTN999999"];
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN1000000");
    }

    #[test]
    fn test_saturated_suffix_skipped() {
        let existing = ["PTN000003", "PTN18446744073709551615", "PTN99999999999999999999"];
        assert_eq!(next_master_id(&existing, "PTN", 6), "PTN000004");
    }

    /// Hands out scripted ids, simulating a stale read under concurrency
    struct ScriptedAllocator {
        ids: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl IdAllocator for ScriptedAllocator {
        async fn next_id(&self) -> AppResult<String> {
            let mut ids = self.ids.lock();
            Ok(ids.remove(0).to_string())
        }
    }

    #[tokio::test]
    async fn test_allocator_reads_repository() {
        let store = Arc::new(MemoryStore::new());
        let allocator = MasterIdAllocator::new(store.clone());
        assert_eq!(allocator.next_id().await.unwrap(), "PTN000001");

        create_partner_with_retry(&allocator, store.as_ref(), &partner("A"), 3)
            .await
            .unwrap();
        assert_eq!(allocator.next_id().await.unwrap(), "PTN000002");
    }

    #[tokio::test]
    async fn test_concurrent_callers_may_compute_same_id() {
        let store = Arc::new(MemoryStore::new());
        let allocator = MasterIdAllocator::new(store.clone());

        let (a, b) = tokio::join!(allocator.next_id(), allocator.next_id());
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_resolved_by_retry() {
        let store = Arc::new(MemoryStore::new());
        let real = MasterIdAllocator::new(store.clone());
        create_partner_with_retry(&real, store.as_ref(), &partner("first"), 3)
            .await
            .unwrap();

        // second caller read before the first write landed
        let stale = ScriptedAllocator {
            ids: Mutex::new(vec!["PTN000001", "PTN000002"]),
        };
        let created = create_partner_with_retry(&stale, store.as_ref(), &partner("second"), 3)
            .await
            .unwrap();
        assert_eq!(created.master_id, "PTN000002");
    }

    #[tokio::test]
    async fn test_exhausted_retries_conflict() {
        let store = Arc::new(MemoryStore::new());
        let real = MasterIdAllocator::new(store.clone());
        create_partner_with_retry(&real, store.as_ref(), &partner("first"), 0)
            .await
            .unwrap();

        let stale = ScriptedAllocator {
            ids: Mutex::new(vec!["PTN000001", "PTN000001"]),
        };
        let err = create_partner_with_retry(&stale, store.as_ref(), &partner("second"), 1)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MasterIdConflict);
    }
}
