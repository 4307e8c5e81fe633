//! Attendance Repository

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::{AttendanceRecord, AttendanceSession};
use sqlx::PgPool;

use super::RepoResult;

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Non-deleted records of a store for one work date
    async fn find_records(
        &self,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Vec<AttendanceRecord>>;

    /// Non-deleted record of one employee for one work date
    async fn find_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>>;

    /// Find or create the live record of one employee for one work date.
    ///
    /// A flagged record is never reused; a fresh one is inserted beside it.
    async fn ensure_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
        now: i64,
    ) -> RepoResult<AttendanceRecord>;

    /// Sessions with a clock-in and no clock-out, earliest first
    async fn find_open_sessions(&self, attendance_id: i64) -> RepoResult<Vec<AttendanceSession>>;

    /// Open a session; `Duplicate` when one is already open
    async fn open_session(&self, attendance_id: i64, clock_in: i64)
    -> RepoResult<AttendanceSession>;

    /// Close an open session; `NotFound` when it is not open
    async fn close_session(&self, session_id: i64, clock_out: i64)
    -> RepoResult<AttendanceSession>;
}

#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    async fn find_records(
        &self,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Vec<AttendanceRecord>> {
        let rows = sqlx::query_as(
            "SELECT * FROM attendance_records
             WHERE store_id = $1 AND work_date = $2 AND is_deleted = FALSE
             ORDER BY employee_id, id",
        )
        .bind(store_id)
        .bind(work_date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
    ) -> RepoResult<Option<AttendanceRecord>> {
        let row = sqlx::query_as(
            "SELECT * FROM attendance_records
             WHERE employee_id = $1 AND store_id = $2 AND work_date = $3 AND is_deleted = FALSE",
        )
        .bind(employee_id)
        .bind(store_id)
        .bind(work_date)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn ensure_record(
        &self,
        employee_id: i64,
        store_id: i64,
        work_date: NaiveDate,
        now: i64,
    ) -> RepoResult<AttendanceRecord> {
        // uq_attendance_records_live only covers unflagged rows
        let row = sqlx::query_as(
            "INSERT INTO attendance_records (employee_id, store_id, work_date, created_at)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (employee_id, store_id, work_date) WHERE is_deleted = FALSE
             DO UPDATE SET created_at = attendance_records.created_at
             RETURNING *",
        )
        .bind(employee_id)
        .bind(store_id)
        .bind(work_date)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_open_sessions(&self, attendance_id: i64) -> RepoResult<Vec<AttendanceSession>> {
        let rows = sqlx::query_as(
            "SELECT * FROM attendance_sessions
             WHERE attendance_id = $1 AND clock_in IS NOT NULL AND clock_out IS NULL
             ORDER BY clock_in, id",
        )
        .bind(attendance_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn open_session(
        &self,
        attendance_id: i64,
        clock_in: i64,
    ) -> RepoResult<AttendanceSession> {
        // uq_attendance_sessions_open turns a second open session into Duplicate
        let row = sqlx::query_as(
            "INSERT INTO attendance_sessions (attendance_id, clock_in, created_at)
             VALUES ($1, $2, $2)
             RETURNING *",
        )
        .bind(attendance_id)
        .bind(clock_in)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn close_session(
        &self,
        session_id: i64,
        clock_out: i64,
    ) -> RepoResult<AttendanceSession> {
        let row = sqlx::query_as(
            "UPDATE attendance_sessions SET clock_out = $2
             WHERE id = $1 AND clock_out IS NULL
             RETURNING *",
        )
        .bind(session_id)
        .bind(clock_out)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
