use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub base_salary: BigDecimal,
    pub total_allowances: BigDecimal,
    pub social_insurance: BigDecimal,
    pub tax_amount: BigDecimal,
    /// Whitelist policy: false disables attendance-driven deductions entirely.
    pub enable_auto_deduction: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub base_salary: BigDecimal,
    pub total_allowances: Option<BigDecimal>,
    pub social_insurance: Option<BigDecimal>,
    pub tax_amount: Option<BigDecimal>,
    pub enable_auto_deduction: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct EmployeeQuery {
    pub active: Option<bool>,
}
