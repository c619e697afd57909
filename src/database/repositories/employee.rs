use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{Employee, EmployeeInput};
use crate::database::utils::sql;
use crate::error::AppError;
use crate::payroll::calculator;

#[derive(Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: EmployeeInput) -> Result<Employee, AppError> {
        calculator::ensure_non_negative("base salary", &input.base_salary)?;
        let now = Utc::now();

        let employee = sqlx::query_as::<_, Employee>(&sql(r#"
            INSERT INTO
                employees (
                    id, name, email, base_salary, total_allowances,
                    social_insurance, tax_amount, enable_auto_deduction,
                    is_active, created_at, updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, TRUE, ?, ?)
            RETURNING
                id, name, email, base_salary, total_allowances,
                social_insurance, tax_amount, enable_auto_deduction,
                is_active, created_at, updated_at
        "#))
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.base_salary)
        .bind(input.total_allowances.unwrap_or_else(BigDecimal::zero))
        .bind(input.social_insurance.unwrap_or_else(BigDecimal::zero))
        .bind(input.tax_amount.unwrap_or_else(BigDecimal::zero))
        .bind(input.enable_auto_deduction.unwrap_or(true))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| AppError::duplicate_or_db(err, "an employee with this email already exists"))?;

        Ok(employee)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(&sql(r#"
            SELECT
                id, name, email, base_salary, total_allowances,
                social_insurance, tax_amount, enable_auto_deduction,
                is_active, created_at, updated_at
            FROM
                employees
            WHERE
                id = ?
        "#))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    pub async fn list(&self, active: Option<bool>) -> Result<Vec<Employee>, AppError> {
        let mut query = String::from(
            r#"
            SELECT
                id, name, email, base_salary, total_allowances,
                social_insurance, tax_amount, enable_auto_deduction,
                is_active, created_at, updated_at
            FROM
                employees
            "#,
        );

        if active.is_some() {
            query.push_str(" WHERE is_active = ?");
        }
        query.push_str(" ORDER BY name ASC");

        let sql = sql(&query);
        let mut q = sqlx::query_as::<_, Employee>(&sql);
        if let Some(active) = active {
            q = q.bind(active);
        }

        let employees = q.fetch_all(&self.pool).await?;
        Ok(employees)
    }

    /// Employees eligible for payroll generation.
    pub async fn get_active(&self) -> Result<Vec<Employee>, AppError> {
        self.list(Some(true)).await
    }
}
