use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{NewPayrollLine, PayrollLine, PayrollStatus, PaymentMethod};
use crate::database::utils::sql;
use crate::error::AppError;
use crate::payroll::calculator::PayBreakdown;

const LINE_COLUMNS: &str = r#"
    id, employee_id, month, year, base_salary, total_allowances,
    overtime_amount, bonuses, absent_days, late_minutes,
    attendance_deduction, late_penalty, manual_deductions, total_deductions,
    social_insurance, tax_amount, gross_salary, net_salary,
    status, payment_method, paid_at, created_at, updated_at
"#;

#[derive(Clone)]
pub struct PayrollRepository {
    pool: PgPool,
}

impl PayrollRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, line: &NewPayrollLine) -> Result<PayrollLine, AppError> {
        Self::insert_on(&self.pool, line).await.map_err(|err| {
            AppError::duplicate_or_db(err, "a payroll line already exists for this period")
        })
    }

    /// Force-regeneration: drop the existing line for the period and write
    /// the recomputed one in a single transaction, so the uniqueness window
    /// never shows two lines or zero lines to a committed reader.
    pub async fn replace(&self, line: &NewPayrollLine) -> Result<PayrollLine, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(&sql(r#"
            DELETE FROM
                payroll_lines
            WHERE
                employee_id = ?
                AND month = ?
                AND year = ?
        "#))
        .bind(line.employee_id)
        .bind(line.month)
        .bind(line.year)
        .execute(&mut *tx)
        .await?;

        let inserted = Self::insert_on(&mut *tx, line).await?;
        tx.commit().await?;

        Ok(inserted)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PayrollLine>, AppError> {
        let query = format!("SELECT {} FROM payroll_lines WHERE id = ?", LINE_COLUMNS);
        let line = sqlx::query_as::<_, PayrollLine>(&sql(&query))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(line)
    }

    pub async fn find_for_period(
        &self,
        employee_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<Option<PayrollLine>, AppError> {
        let query = format!(
            "SELECT {} FROM payroll_lines WHERE employee_id = ? AND month = ? AND year = ?",
            LINE_COLUMNS
        );
        let line = sqlx::query_as::<_, PayrollLine>(&sql(&query))
            .bind(employee_id)
            .bind(month)
            .bind(year)
            .fetch_optional(&self.pool)
            .await?;

        Ok(line)
    }

    pub async fn list_for_period(
        &self,
        month: i32,
        year: i32,
        status: Option<PayrollStatus>,
        employee_id: Option<Uuid>,
    ) -> Result<Vec<PayrollLine>, AppError> {
        let mut query = format!(
            "SELECT {} FROM payroll_lines WHERE month = ? AND year = ?",
            LINE_COLUMNS
        );
        if status.is_some() {
            query.push_str(" AND status = ?");
        }
        if employee_id.is_some() {
            query.push_str(" AND employee_id = ?");
        }
        query.push_str(" ORDER BY created_at ASC");

        let sql = sql(&query);
        let mut q = sqlx::query_as::<_, PayrollLine>(&sql)
            .bind(month)
            .bind(year);
        if let Some(status) = status {
            q = q.bind(status);
        }
        if let Some(employee_id) = employee_id {
            q = q.bind(employee_id);
        }

        let lines = q.fetch_all(&self.pool).await?;
        Ok(lines)
    }

    /// Status-guarded transition. The `WHERE status IN (...)` clause is what
    /// makes the read-check-write atomic: two racing calls cannot both match
    /// the guard. Returns `None` when the guard did not match.
    pub async fn transition(
        &self,
        id: Uuid,
        from: &[PayrollStatus],
        to: PayrollStatus,
    ) -> Result<Option<PayrollLine>, AppError> {
        let placeholders = vec!["?"; from.len()].join(", ");
        let query = format!(
            "UPDATE payroll_lines SET status = ?, updated_at = ? WHERE id = ? AND status IN ({}) RETURNING {}",
            placeholders, LINE_COLUMNS
        );

        let sql = sql(&query);
        let mut q = sqlx::query_as::<_, PayrollLine>(&sql)
            .bind(to)
            .bind(Utc::now())
            .bind(id);
        for status in from {
            q = q.bind(*status);
        }

        let line = q.fetch_optional(&self.pool).await?;
        Ok(line)
    }

    /// Guarded pay: only an approved line can move to paid, and `paid_at` is
    /// stamped in the same statement.
    pub async fn mark_paid(
        &self,
        id: Uuid,
        method: PaymentMethod,
    ) -> Result<Option<PayrollLine>, AppError> {
        let now = Utc::now();
        let query = format!(
            "UPDATE payroll_lines SET status = ?, payment_method = ?, paid_at = ?, updated_at = ? WHERE id = ? AND status = ? RETURNING {}",
            LINE_COLUMNS
        );

        let line = sqlx::query_as::<_, PayrollLine>(&sql(&query))
            .bind(PayrollStatus::Paid)
            .bind(method)
            .bind(now)
            .bind(now)
            .bind(id)
            .bind(PayrollStatus::Approved)
            .fetch_optional(&self.pool)
            .await?;

        Ok(line)
    }

    /// Guarded edit: rewrites the editable components and the recomputed
    /// totals while the line is still a draft. Attendance-derived fields stay
    /// as generated.
    pub async fn apply_edit(
        &self,
        id: Uuid,
        breakdown: &PayBreakdown,
    ) -> Result<Option<PayrollLine>, AppError> {
        let query = format!(
            r#"
            UPDATE payroll_lines
            SET
                base_salary = ?, total_allowances = ?, overtime_amount = ?,
                bonuses = ?, manual_deductions = ?, social_insurance = ?,
                tax_amount = ?, total_deductions = ?, gross_salary = ?,
                net_salary = ?, updated_at = ?
            WHERE
                id = ?
                AND status = ?
            RETURNING {}
            "#,
            LINE_COLUMNS
        );

        let line = sqlx::query_as::<_, PayrollLine>(&sql(&query))
            .bind(&breakdown.base_salary)
            .bind(&breakdown.total_allowances)
            .bind(&breakdown.overtime_amount)
            .bind(&breakdown.bonuses)
            .bind(&breakdown.manual_deductions)
            .bind(&breakdown.social_insurance)
            .bind(&breakdown.tax_amount)
            .bind(&breakdown.total_deductions)
            .bind(&breakdown.gross_salary)
            .bind(&breakdown.net_salary)
            .bind(Utc::now())
            .bind(id)
            .bind(PayrollStatus::Draft)
            .fetch_optional(&self.pool)
            .await?;

        Ok(line)
    }

    async fn insert_on<'e, E>(executor: E, line: &NewPayrollLine) -> Result<PayrollLine, sqlx::Error>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                payroll_lines (
                    id, employee_id, month, year, base_salary, total_allowances,
                    overtime_amount, bonuses, absent_days, late_minutes,
                    attendance_deduction, late_penalty, manual_deductions,
                    total_deductions, social_insurance, tax_amount,
                    gross_salary, net_salary, status, payment_method, paid_at,
                    created_at, updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, NULL, NULL, ?, ?)
            RETURNING {}
            "#,
            LINE_COLUMNS
        );

        sqlx::query_as::<_, PayrollLine>(&sql(&query))
            .bind(Uuid::new_v4())
            .bind(line.employee_id)
            .bind(line.month)
            .bind(line.year)
            .bind(&line.breakdown.base_salary)
            .bind(&line.breakdown.total_allowances)
            .bind(&line.breakdown.overtime_amount)
            .bind(&line.breakdown.bonuses)
            .bind(line.breakdown.absent_days as i32)
            .bind(line.breakdown.late_minutes)
            .bind(&line.breakdown.attendance_deduction)
            .bind(&line.breakdown.late_penalty)
            .bind(&line.breakdown.manual_deductions)
            .bind(&line.breakdown.total_deductions)
            .bind(&line.breakdown.social_insurance)
            .bind(&line.breakdown.tax_amount)
            .bind(&line.breakdown.gross_salary)
            .bind(&line.breakdown.net_salary)
            .bind(line.status)
            .bind(now)
            .bind(now)
            .fetch_one(executor)
            .await
    }
}
