use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{AttendanceDay, AttendanceDayInput, AttendanceSummary};
use crate::database::utils::{period_bounds, sql};
use crate::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct SummaryRow {
    recorded_days: i64,
    absent_days: i64,
    late_minutes: i64,
    overtime_minutes: i64,
}

#[derive(Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn record_day(&self, input: AttendanceDayInput) -> Result<AttendanceDay, AppError> {
        let late_minutes = input.late_minutes.unwrap_or(0);
        let overtime_minutes = input.overtime_minutes.unwrap_or(0);
        if late_minutes < 0 || overtime_minutes < 0 {
            return Err(AppError::InvalidInput(
                "late and overtime minutes must not be negative".to_string(),
            ));
        }

        let day = sqlx::query_as::<_, AttendanceDay>(&sql(r#"
            INSERT INTO
                attendance_days (
                    id, employee_id, work_date, status,
                    late_minutes, overtime_minutes, created_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id, employee_id, work_date, status,
                late_minutes, overtime_minutes, created_at
        "#))
        .bind(Uuid::new_v4())
        .bind(input.employee_id)
        .bind(input.work_date)
        .bind(input.status)
        .bind(late_minutes)
        .bind(overtime_minutes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            AppError::duplicate_or_db(err, "attendance already recorded for this employee and date")
        })?;

        Ok(day)
    }

    /// Aggregate an employee's attendance for one period. Returns `None` when
    /// the employee has no recorded days at all, which callers treat as
    /// missing data rather than a perfect month.
    pub async fn summary_for_period(
        &self,
        employee_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<Option<AttendanceSummary>, AppError> {
        let (start, end) = period_bounds(month, year)?;

        let row = sqlx::query_as::<_, SummaryRow>(&sql(r#"
            SELECT
                COUNT(*) AS recorded_days,
                COUNT(*) FILTER (WHERE status = 'absent') AS absent_days,
                COALESCE(SUM(late_minutes), 0)::BIGINT AS late_minutes,
                COALESCE(SUM(overtime_minutes), 0)::BIGINT AS overtime_minutes
            FROM
                attendance_days
            WHERE
                employee_id = ?
                AND work_date >= ?
                AND work_date < ?
        "#))
        .bind(employee_id)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        if row.recorded_days == 0 {
            return Ok(None);
        }

        Ok(Some(AttendanceSummary {
            absent_days: row.absent_days,
            late_minutes: row.late_minutes,
            overtime_minutes: row.overtime_minutes,
        }))
    }
}
