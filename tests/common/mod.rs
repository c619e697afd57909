#![allow(dead_code)]

use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use uuid::Uuid;

use payroll_be::config::PayrollRates;
use payroll_be::database::models::{AttendanceSummary, PayrollLine, PayrollStatus};
use payroll_be::payroll::calculator::{PayBreakdown, PayInputs};

/// The worked example used throughout the payroll rules: 6000 base, 500
/// allowances, 300 insurance, 100 tax.
pub fn standard_inputs() -> PayInputs {
    PayInputs {
        base_salary: BigDecimal::from(6000),
        total_allowances: BigDecimal::from(500),
        bonuses: BigDecimal::zero(),
        manual_deductions: BigDecimal::zero(),
        social_insurance: BigDecimal::from(300),
        tax_amount: BigDecimal::from(100),
        enable_auto_deduction: true,
    }
}

pub fn attendance(absent_days: i64, late_minutes: i64) -> AttendanceSummary {
    AttendanceSummary {
        absent_days,
        late_minutes,
        overtime_minutes: 0,
    }
}

pub fn default_rates() -> PayrollRates {
    PayrollRates::default()
}

/// Materialize a breakdown as a stored line, the way the generator would.
pub fn line_from(
    employee_id: Uuid,
    status: PayrollStatus,
    breakdown: &PayBreakdown,
) -> PayrollLine {
    let now = Utc::now();
    PayrollLine {
        id: Uuid::new_v4(),
        employee_id,
        month: 7,
        year: 2026,
        base_salary: breakdown.base_salary.clone(),
        total_allowances: breakdown.total_allowances.clone(),
        overtime_amount: breakdown.overtime_amount.clone(),
        bonuses: breakdown.bonuses.clone(),
        absent_days: breakdown.absent_days as i32,
        late_minutes: breakdown.late_minutes,
        attendance_deduction: breakdown.attendance_deduction.clone(),
        late_penalty: breakdown.late_penalty.clone(),
        manual_deductions: breakdown.manual_deductions.clone(),
        total_deductions: breakdown.total_deductions.clone(),
        social_insurance: breakdown.social_insurance.clone(),
        tax_amount: breakdown.tax_amount.clone(),
        gross_salary: breakdown.gross_salary.clone(),
        net_salary: breakdown.net_salary.clone(),
        status,
        payment_method: None,
        paid_at: None,
        created_at: now,
        updated_at: now,
    }
}
