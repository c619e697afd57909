use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum AttendanceStatus {
        Present => "present",
        Absent => "absent",
        OnLeave => "on_leave",
    }
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDay {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub work_date: NaiveDate,
    pub status: AttendanceStatus,
    pub late_minutes: i32,
    pub overtime_minutes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDayInput {
    pub employee_id: Uuid,
    pub work_date: NaiveDate,
    pub status: AttendanceStatus,
    pub late_minutes: Option<i32>,
    pub overtime_minutes: Option<i32>,
}

/// Per-period aggregate over an employee's attendance rows. Only exists when
/// the employee has at least one recorded day in the period; absence of rows
/// means "no attendance data", not a summary of zeros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub absent_days: i64,
    pub late_minutes: i64,
    pub overtime_minutes: i64,
}
