use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::Serialize;

use crate::config::PayrollRates;
use crate::database::models::{AttendanceSummary, Employee};
use crate::error::AppError;

/// Monetary inputs for one employee's computation. Bonuses and manual
/// deductions start at zero on generation and are edited while the line is
/// still a draft.
#[derive(Debug, Clone)]
pub struct PayInputs {
    pub base_salary: BigDecimal,
    pub total_allowances: BigDecimal,
    pub bonuses: BigDecimal,
    pub manual_deductions: BigDecimal,
    pub social_insurance: BigDecimal,
    pub tax_amount: BigDecimal,
    pub enable_auto_deduction: bool,
}

impl From<&Employee> for PayInputs {
    fn from(employee: &Employee) -> Self {
        Self {
            base_salary: employee.base_salary.clone(),
            total_allowances: employee.total_allowances.clone(),
            bonuses: BigDecimal::zero(),
            manual_deductions: BigDecimal::zero(),
            social_insurance: employee.social_insurance.clone(),
            tax_amount: employee.tax_amount.clone(),
            enable_auto_deduction: employee.enable_auto_deduction,
        }
    }
}

/// Full computed pay for one period. Totals are always derived from the
/// component fields via [`PayBreakdown::recompute_totals`]; nothing stores a
/// net figure that could drift from its parts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayBreakdown {
    pub base_salary: BigDecimal,
    pub total_allowances: BigDecimal,
    pub overtime_amount: BigDecimal,
    pub bonuses: BigDecimal,
    pub absent_days: i64,
    pub late_minutes: i64,
    pub attendance_deduction: BigDecimal,
    pub late_penalty: BigDecimal,
    pub manual_deductions: BigDecimal,
    pub total_deductions: BigDecimal,
    pub social_insurance: BigDecimal,
    pub tax_amount: BigDecimal,
    pub gross_salary: BigDecimal,
    pub net_salary: BigDecimal,
}

impl PayBreakdown {
    /// gross = base + allowances + overtime + bonuses;
    /// deductions = attendance + late + manual;
    /// net = gross - deductions - insurance - tax. Net may go negative; the
    /// caller decides what to do with that, not the calculator.
    pub fn recompute_totals(&mut self) {
        self.gross_salary = round_money(
            &self.base_salary + &self.total_allowances + &self.overtime_amount + &self.bonuses,
        );
        self.total_deductions = round_money(
            &self.attendance_deduction + &self.late_penalty + &self.manual_deductions,
        );
        self.net_salary = round_money(
            &self.gross_salary - &self.total_deductions - &self.social_insurance - &self.tax_amount,
        );
    }
}

/// Pure computation of one payroll line. No I/O, no clock access.
pub fn compute(
    inputs: &PayInputs,
    attendance: &AttendanceSummary,
    rates: &PayrollRates,
) -> Result<PayBreakdown, AppError> {
    ensure_non_negative("base salary", &inputs.base_salary)?;
    ensure_non_negative("total allowances", &inputs.total_allowances)?;
    ensure_non_negative("bonuses", &inputs.bonuses)?;
    ensure_non_negative("manual deductions", &inputs.manual_deductions)?;
    ensure_non_negative("social insurance", &inputs.social_insurance)?;
    ensure_non_negative("tax amount", &inputs.tax_amount)?;
    ensure_non_negative_count("absent days", attendance.absent_days)?;
    ensure_non_negative_count("late minutes", attendance.late_minutes)?;
    ensure_non_negative_count("overtime minutes", attendance.overtime_minutes)?;

    if rates.late_rate_per_minute.is_none() && rates.workday_minutes <= 0 {
        return Err(AppError::InvalidInput(
            "workday minutes must be positive to derive the late rate".to_string(),
        ));
    }
    ensure_non_negative_count("overtime multiplier", rates.overtime_multiplier)?;

    let per_minute_rate = match &rates.late_rate_per_minute {
        Some(rate) => rate.clone(),
        None => &inputs.base_salary / BigDecimal::from(30 * rates.workday_minutes),
    };

    let (attendance_deduction, late_penalty) = if inputs.enable_auto_deduction {
        // Absence is priced at base / 30 per day, capped at the full base
        // salary no matter how many absent days come in.
        let daily_rate = &inputs.base_salary / BigDecimal::from(30);
        let raw_absence = daily_rate * BigDecimal::from(attendance.absent_days);
        let attendance_deduction = raw_absence.min(inputs.base_salary.clone());

        let over_grace = (attendance.late_minutes - rates.monthly_grace_minutes).max(0);
        let billable_late =
            over_grace.min(rates.daily_late_cap_minutes * rates.workdays_in_month);
        let late_penalty = &per_minute_rate * BigDecimal::from(billable_late);

        (round_money(attendance_deduction), round_money(late_penalty))
    } else {
        // Whitelisted employees accrue no attendance-driven deductions.
        (BigDecimal::zero(), BigDecimal::zero())
    };

    let overtime_amount = round_money(
        &per_minute_rate
            * BigDecimal::from(attendance.overtime_minutes * rates.overtime_multiplier),
    );

    let mut breakdown = PayBreakdown {
        base_salary: inputs.base_salary.clone(),
        total_allowances: inputs.total_allowances.clone(),
        overtime_amount,
        bonuses: inputs.bonuses.clone(),
        absent_days: attendance.absent_days,
        late_minutes: attendance.late_minutes,
        attendance_deduction,
        late_penalty,
        manual_deductions: inputs.manual_deductions.clone(),
        total_deductions: BigDecimal::zero(),
        social_insurance: inputs.social_insurance.clone(),
        tax_amount: inputs.tax_amount.clone(),
        gross_salary: BigDecimal::zero(),
        net_salary: BigDecimal::zero(),
    };
    breakdown.recompute_totals();

    Ok(breakdown)
}

pub fn round_money(value: BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

pub fn ensure_non_negative(label: &str, value: &BigDecimal) -> Result<(), AppError> {
    if value < &BigDecimal::zero() {
        return Err(AppError::InvalidInput(format!(
            "{} must not be negative, got {}",
            label, value
        )));
    }
    Ok(())
}

fn ensure_non_negative_count(label: &str, value: i64) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::InvalidInput(format!(
            "{} must not be negative, got {}",
            label, value
        )));
    }
    Ok(())
}
