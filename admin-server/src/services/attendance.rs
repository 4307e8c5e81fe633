//! Attendance state resolver and clock actions
//!
//! "Working" is derived, never stored: an employee is working when one of
//! their attendance records for the day has a session with a clock-in and no
//! clock-out.

use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;
use shared::models::{AttendanceSession, WorkingEmployee};

use crate::db::repository::{AttendanceRepository, EmployeeRepository, RepoError};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct AttendanceResolver {
    attendance: Arc<dyn AttendanceRepository>,
    employees: Arc<dyn EmployeeRepository>,
}

impl AttendanceResolver {
    pub fn new(
        attendance: Arc<dyn AttendanceRepository>,
        employees: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            attendance,
            employees,
        }
    }

    /// Employees with an open session for (store, date), sorted by employee id.
    ///
    /// Failing to list the records fails the call. A failing session lookup
    /// drops that record; a failing name lookup leaves the name empty.
    pub async fn working_employees(
        &self,
        store_id: i64,
        date: NaiveDate,
    ) -> AppResult<Vec<WorkingEmployee>> {
        let records = self.attendance.find_records(store_id, date).await?;

        let lookups = records.iter().map(|record| async move {
            match self.attendance.find_open_sessions(record.id).await {
                Ok(sessions) => earliest_clock_in(&sessions).map(|clock_in| (record, clock_in)),
                Err(e) => {
                    tracing::warn!(
                        attendance_id = record.id,
                        employee_id = record.employee_id,
                        error = %e,
                        "Session lookup failed, skipping record"
                    );
                    None
                }
            }
        });
        let open: Vec<_> = join_all(lookups).await.into_iter().flatten().collect();

        let named = open.into_iter().map(|(record, clock_in)| async move {
            WorkingEmployee {
                employee_id: record.employee_id,
                employee_name: self.resolve_name(record.employee_id).await,
                attendance_id: record.id,
                clock_in,
            }
        });
        let mut working = join_all(named).await;
        working.sort_by_key(|w| (w.employee_id, w.attendance_id));

        tracing::debug!(store_id, %date, count = working.len(), "Resolved working employees");
        Ok(working)
    }

    async fn resolve_name(&self, employee_id: i64) -> Option<String> {
        match self.employees.find_name(employee_id).await {
            Ok(Some(name)) if !name.trim().is_empty() => Some(name),
            Ok(_) => {
                tracing::warn!(employee_id, "Employee name not found");
                None
            }
            Err(e) => {
                tracing::warn!(employee_id, error = %e, "Employee name lookup failed");
                None
            }
        }
    }

    /// Open a session for the employee, creating the day's record if needed
    pub async fn clock_in(
        &self,
        employee_id: i64,
        store_id: i64,
        date: NaiveDate,
        now: i64,
    ) -> AppResult<AttendanceSession> {
        self.ensure_employee(employee_id).await?;

        let record = self
            .attendance
            .ensure_record(employee_id, store_id, date, now)
            .await?;
        if !self.attendance.find_open_sessions(record.id).await?.is_empty() {
            return Err(already_clocked_in(employee_id));
        }

        match self.attendance.open_session(record.id, now).await {
            Ok(session) => {
                tracing::info!(employee_id, attendance_id = record.id, "Clocked in");
                Ok(session)
            }
            Err(RepoError::Duplicate(_)) => Err(already_clocked_in(employee_id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Close the employee's open session for the day
    pub async fn clock_out(
        &self,
        employee_id: i64,
        store_id: i64,
        date: NaiveDate,
        now: i64,
    ) -> AppResult<AttendanceSession> {
        let record = self
            .attendance
            .find_record(employee_id, store_id, date)
            .await?
            .ok_or_else(|| not_clocked_in(employee_id))?;

        let open = self.attendance.find_open_sessions(record.id).await?;
        let session = open.first().ok_or_else(|| not_clocked_in(employee_id))?;

        match self.attendance.close_session(session.id, now).await {
            Ok(closed) => {
                tracing::info!(employee_id, attendance_id = record.id, "Clocked out");
                Ok(closed)
            }
            Err(RepoError::NotFound(_)) => Err(not_clocked_in(employee_id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_employee(&self, employee_id: i64) -> AppResult<()> {
        match self.employees.find_name(employee_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::new(ErrorCode::EmployeeNotFound)
                .with_detail("employee_id", employee_id)),
        }
    }
}

fn earliest_clock_in(sessions: &[AttendanceSession]) -> Option<i64> {
    sessions
        .iter()
        .filter(|s| s.is_open())
        .filter_map(|s| s.clock_in)
        .min()
}

fn already_clocked_in(employee_id: i64) -> AppError {
    AppError::new(ErrorCode::AlreadyClockedIn).with_detail("employee_id", employee_id)
}

fn not_clocked_in(employee_id: i64) -> AppError {
    AppError::new(ErrorCode::NotClockedIn).with_detail("employee_id", employee_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryStore;
    use crate::db::repository::RepoResult;
    use async_trait::async_trait;
    use shared::models::{AttendanceRecord, EmployeeSnapshot};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn employee(id: i64, name: &str) -> EmployeeSnapshot {
        EmployeeSnapshot {
            id,
            store_id: Some(1),
            name: name.into(),
            phone: None,
            email: None,
            position: None,
        }
    }

    fn resolver(store: &Arc<MemoryStore>) -> AttendanceResolver {
        AttendanceResolver::new(store.clone(), store.clone())
    }

    #[tokio::test]
    async fn test_working_iff_open_session() {
        let store = Arc::new(MemoryStore::new());
        store.insert_employee(employee(10, "김민수"));
        store.insert_employee(employee(11, "이서연"));
        store.insert_employee(employee(12, "박지훈"));

        // 10: open session
        let r10 = store.ensure_record(10, 1, date(), 0).await.unwrap();
        store.open_session(r10.id, 1_000).await.unwrap();
        // 11: only closed sessions
        let r11 = store.ensure_record(11, 1, date(), 0).await.unwrap();
        store.insert_closed_session(r11.id, 500, 900);
        // 12: closed then reopened
        let r12 = store.ensure_record(12, 1, date(), 0).await.unwrap();
        store.insert_closed_session(r12.id, 100, 200);
        store.open_session(r12.id, 3_000).await.unwrap();

        let working = resolver(&store).working_employees(1, date()).await.unwrap();
        let ids: Vec<i64> = working.iter().map(|w| w.employee_id).collect();
        assert_eq!(ids, [10, 12]);
        assert_eq!(working[0].employee_name.as_deref(), Some("김민수"));
        assert_eq!(working[1].clock_in, 3_000);
    }

    #[tokio::test]
    async fn test_other_store_and_deleted_records_ignored() {
        let store = Arc::new(MemoryStore::new());
        store.insert_employee(employee(10, "김민수"));
        let other = store.ensure_record(10, 2, date(), 0).await.unwrap();
        store.open_session(other.id, 1).await.unwrap();
        let deleted = store.ensure_record(10, 1, date(), 0).await.unwrap();
        store.open_session(deleted.id, 1).await.unwrap();
        store.flag_record_deleted(deleted.id);

        let working = resolver(&store).working_employees(1, date()).await.unwrap();
        assert!(working.is_empty());
    }

    #[tokio::test]
    async fn test_clock_in_after_record_flagged() {
        let store = Arc::new(MemoryStore::new());
        store.insert_employee(employee(10, "김민수"));
        let flagged = store.ensure_record(10, 1, date(), 0).await.unwrap();
        store.open_session(flagged.id, 50).await.unwrap();
        store.flag_record_deleted(flagged.id);
        let resolver = resolver(&store);

        let session = resolver.clock_in(10, 1, date(), 100).await.unwrap();
        assert_ne!(session.attendance_id, flagged.id);
        assert_eq!(session.clock_in, Some(100));

        let working = resolver.working_employees(1, date()).await.unwrap();
        assert_eq!(working.len(), 1);
        assert_eq!(working[0].attendance_id, session.attendance_id);
        assert_eq!(working[0].clock_in, 100);
    }

    #[tokio::test]
    async fn test_missing_name_is_null() {
        let store = Arc::new(MemoryStore::new());
        let record = store.ensure_record(99, 1, date(), 0).await.unwrap();
        store.open_session(record.id, 5).await.unwrap();

        let working = resolver(&store).working_employees(1, date()).await.unwrap();
        assert_eq!(working.len(), 1);
        assert_eq!(working[0].employee_name, None);
    }

    /// Fails session lookups for one record and every name lookup
    struct Flaky {
        inner: Arc<MemoryStore>,
        broken_record: i64,
    }

    #[async_trait]
    impl AttendanceRepository for Flaky {
        async fn find_records(&self, s: i64, d: NaiveDate) -> RepoResult<Vec<AttendanceRecord>> {
            self.inner.find_records(s, d).await
        }
        async fn find_record(
            &self,
            e: i64,
            s: i64,
            d: NaiveDate,
        ) -> RepoResult<Option<AttendanceRecord>> {
            self.inner.find_record(e, s, d).await
        }
        async fn ensure_record(
            &self,
            e: i64,
            s: i64,
            d: NaiveDate,
            now: i64,
        ) -> RepoResult<AttendanceRecord> {
            self.inner.ensure_record(e, s, d, now).await
        }
        async fn find_open_sessions(&self, id: i64) -> RepoResult<Vec<AttendanceSession>> {
            if id == self.broken_record {
                return Err(RepoError::Database("connection reset".into()));
            }
            self.inner.find_open_sessions(id).await
        }
        async fn open_session(&self, id: i64, at: i64) -> RepoResult<AttendanceSession> {
            self.inner.open_session(id, at).await
        }
        async fn close_session(&self, id: i64, at: i64) -> RepoResult<AttendanceSession> {
            self.inner.close_session(id, at).await
        }
    }

    #[async_trait]
    impl EmployeeRepository for Flaky {
        async fn find_name(&self, _id: i64) -> RepoResult<Option<String>> {
            Err(RepoError::Database("timeout".into()))
        }
        async fn find_snapshot(&self, _id: i64) -> RepoResult<Option<EmployeeSnapshot>> {
            Err(RepoError::Database("timeout".into()))
        }
        async fn search_ids_by_name(&self, _term: &str) -> RepoResult<Vec<i64>> {
            Err(RepoError::Database("timeout".into()))
        }
    }

    #[tokio::test]
    async fn test_partial_failures_degrade() {
        let store = Arc::new(MemoryStore::new());
        let ok = store.ensure_record(10, 1, date(), 0).await.unwrap();
        store.open_session(ok.id, 1).await.unwrap();
        let broken = store.ensure_record(11, 1, date(), 0).await.unwrap();
        store.open_session(broken.id, 1).await.unwrap();

        let flaky = Arc::new(Flaky {
            inner: store,
            broken_record: broken.id,
        });
        let resolver = AttendanceResolver::new(flaky.clone(), flaky);
        let working = resolver.working_employees(1, date()).await.unwrap();

        assert_eq!(working.len(), 1);
        assert_eq!(working[0].employee_id, 10);
        assert_eq!(working[0].employee_name, None);
    }

    #[tokio::test]
    async fn test_clock_in_twice_conflicts() {
        let store = Arc::new(MemoryStore::new());
        store.insert_employee(employee(10, "김민수"));
        let resolver = resolver(&store);

        resolver.clock_in(10, 1, date(), 100).await.unwrap();
        let err = resolver.clock_in(10, 1, date(), 200).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyClockedIn);

        let closed = resolver.clock_out(10, 1, date(), 300).await.unwrap();
        assert_eq!(closed.clock_out, Some(300));
        let err = resolver.clock_out(10, 1, date(), 400).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotClockedIn);

        // a new session may start after clocking out
        resolver.clock_in(10, 1, date(), 500).await.unwrap();
        assert_eq!(resolver.working_employees(1, date()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clock_in_unknown_employee() {
        let store = Arc::new(MemoryStore::new());
        let err = resolver(&store)
            .clock_in(42, 1, date(), 1)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmployeeNotFound);
    }
}
