//! Attendance Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One attendance record per (employee, store, work date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub store_id: i64,
    pub work_date: NaiveDate,
    #[serde(default)]
    pub is_deleted: bool,
    pub created_at: i64,
}

/// A single clock-in / clock-out interval of an attendance record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AttendanceSession {
    pub id: i64,
    pub attendance_id: i64,
    /// Clock-in time (Unix millis)
    pub clock_in: Option<i64>,
    /// Clock-out time (Unix millis), null while the session is open
    pub clock_out: Option<i64>,
    pub created_at: i64,
}

impl AttendanceSession {
    /// A session is open when it has a clock-in and no clock-out yet
    pub fn is_open(&self) -> bool {
        self.clock_in.is_some() && self.clock_out.is_none()
    }
}

/// Employee currently in an open session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingEmployee {
    pub employee_id: i64,
    /// Display name, null when the name lookup failed
    pub employee_name: Option<String>,
    pub attendance_id: i64,
    /// Earliest open clock-in (Unix millis)
    pub clock_in: i64,
}

/// Clock-in / clock-out payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockRequest {
    pub employee_id: Option<i64>,
}
