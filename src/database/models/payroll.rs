use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::macros::string_enum;
use crate::payroll::calculator::PayBreakdown;

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PayrollStatus {
        Draft => "draft",
        PendingApproval => "pending_approval",
        Approved => "approved",
        Paid => "paid",
        Cancelled => "cancelled",
        /// Transient current-month estimate; never persisted.
        Projection => "projection",
    }
}

impl PayrollStatus {
    /// Legal lifecycle moves. Paid and cancelled lines are terminal, and a
    /// projection is not a real line at all.
    pub fn can_transition_to(self, next: PayrollStatus) -> bool {
        use PayrollStatus::*;
        matches!(
            (self, next),
            (Draft, PendingApproval)
                | (Draft, Approved)
                | (Draft, Cancelled)
                | (PendingApproval, Approved)
                | (PendingApproval, Cancelled)
                | (Approved, Paid)
                | (Approved, Cancelled)
        )
    }

    pub fn editable(self) -> bool {
        matches!(self, PayrollStatus::Draft)
    }

    pub fn terminal(self) -> bool {
        matches!(self, PayrollStatus::Paid | PayrollStatus::Cancelled)
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum PaymentMethod {
        BankTransfer => "bank_transfer",
        Cash => "cash",
        Cheque => "cheque",
    }
}

/// One employee's computed pay for one (month, year).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PayrollLine {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub base_salary: BigDecimal,
    pub total_allowances: BigDecimal,
    pub overtime_amount: BigDecimal,
    pub bonuses: BigDecimal,
    pub absent_days: i32,
    pub late_minutes: i64,
    pub attendance_deduction: BigDecimal,
    pub late_penalty: BigDecimal,
    pub manual_deductions: BigDecimal,
    pub total_deductions: BigDecimal,
    pub social_insurance: BigDecimal,
    pub tax_amount: BigDecimal,
    pub gross_salary: BigDecimal,
    pub net_salary: BigDecimal,
    pub status: PayrollStatus,
    pub payment_method: Option<PaymentMethod>,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&PayrollLine> for PayBreakdown {
    fn from(line: &PayrollLine) -> Self {
        PayBreakdown {
            base_salary: line.base_salary.clone(),
            total_allowances: line.total_allowances.clone(),
            overtime_amount: line.overtime_amount.clone(),
            bonuses: line.bonuses.clone(),
            absent_days: line.absent_days as i64,
            late_minutes: line.late_minutes,
            attendance_deduction: line.attendance_deduction.clone(),
            late_penalty: line.late_penalty.clone(),
            manual_deductions: line.manual_deductions.clone(),
            total_deductions: line.total_deductions.clone(),
            social_insurance: line.social_insurance.clone(),
            tax_amount: line.tax_amount.clone(),
            gross_salary: line.gross_salary.clone(),
            net_salary: line.net_salary.clone(),
        }
    }
}

/// Insert payload for a freshly computed line.
#[derive(Debug, Clone)]
pub struct NewPayrollLine {
    pub employee_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub breakdown: PayBreakdown,
    pub status: PayrollStatus,
}

/// Current-month estimate; shaped like a line but carries no row identity,
/// so it can never be approved or paid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollProjection {
    pub employee_id: Uuid,
    pub month: i32,
    pub year: i32,
    pub status: PayrollStatus,
    #[serde(flatten)]
    pub breakdown: PayBreakdown,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub month: i32,
    pub year: i32,
    #[serde(default)]
    pub force_regenerate: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPayrollInput {
    pub base_salary: Option<BigDecimal>,
    pub total_allowances: Option<BigDecimal>,
    pub overtime_amount: Option<BigDecimal>,
    pub bonuses: Option<BigDecimal>,
    pub manual_deductions: Option<BigDecimal>,
    pub social_insurance: Option<BigDecimal>,
    pub tax_amount: Option<BigDecimal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayRequest {
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPayRequest {
    pub ids: Vec<Uuid>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollQuery {
    pub month: i32,
    pub year: i32,
    pub status: Option<String>,
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub month: i32,
    pub year: i32,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub success: Vec<Uuid>,
    pub skipped: Vec<Uuid>,
    pub regenerated: Vec<Uuid>,
    pub failed: Vec<GenerationFailure>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFailure {
    pub employee_id: Uuid,
    pub reason: String,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPayReport {
    pub paid: Vec<Uuid>,
    pub failed: Vec<BulkPayFailure>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkPayFailure {
    pub id: Uuid,
    pub reason: String,
}
