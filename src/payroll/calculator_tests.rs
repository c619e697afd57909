use bigdecimal::{BigDecimal, Zero};
use pretty_assertions::assert_eq;

use crate::config::PayrollRates;
use crate::database::models::AttendanceSummary;
use crate::error::AppError;
use crate::payroll::calculator::{PayInputs, compute, round_money};

fn money(value: i64) -> BigDecimal {
    round_money(BigDecimal::from(value))
}

fn inputs() -> PayInputs {
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

fn attendance(absent_days: i64, late_minutes: i64) -> AttendanceSummary {
    AttendanceSummary {
        absent_days,
        late_minutes,
        overtime_minutes: 0,
    }
}

fn rates() -> PayrollRates {
    PayrollRates::default()
}

#[test]
fn three_absent_days_deduct_at_daily_rate() {
    let breakdown = compute(&inputs(), &attendance(3, 0), &rates()).unwrap();

    // daily rate 6000 / 30 = 200
    assert_eq!(breakdown.attendance_deduction, money(600));
    assert_eq!(breakdown.late_penalty, money(0));
    assert_eq!(breakdown.total_deductions, money(600));
    assert_eq!(breakdown.gross_salary, money(6500));
    assert_eq!(breakdown.net_salary, money(5500));
}

#[test]
fn absence_deduction_is_capped_at_base_salary() {
    // 40 absent days would raw-deduct 8000 against a 6000 base
    let breakdown = compute(&inputs(), &attendance(40, 0), &rates()).unwrap();
    assert_eq!(breakdown.attendance_deduction, money(6000));
}

#[test]
fn whitelisted_employee_accrues_no_attendance_deductions() {
    let mut whitelisted = inputs();
    whitelisted.enable_auto_deduction = false;

    let breakdown = compute(&whitelisted, &attendance(40, 100_000), &rates()).unwrap();

    assert_eq!(breakdown.attendance_deduction, BigDecimal::zero());
    assert_eq!(breakdown.late_penalty, BigDecimal::zero());
    assert_eq!(breakdown.net_salary, money(6100));
}

#[test]
fn lateness_within_grace_costs_nothing() {
    let breakdown = compute(&inputs(), &attendance(0, 120), &rates()).unwrap();
    assert_eq!(breakdown.late_penalty, BigDecimal::zero());
}

#[test]
fn lateness_over_grace_is_billed_per_minute() {
    // per-minute rate 6000 / (30 * 480) = 0.416..; 120 over grace
    let breakdown = compute(&inputs(), &attendance(0, 240), &rates()).unwrap();
    assert_eq!(breakdown.late_penalty, BigDecimal::from(50).with_scale(2));
}

#[test]
fn billable_lateness_is_capped_by_daily_cap_times_workdays() {
    let capped = compute(&inputs(), &attendance(0, 1_000_000), &rates()).unwrap();
    // cap = 60 * 22 = 1320 minutes at 0.41666../min = 550
    assert_eq!(capped.late_penalty, BigDecimal::from(550).with_scale(2));
}

#[test]
fn explicit_late_rate_overrides_derived_rate() {
    let mut custom = rates();
    custom.late_rate_per_minute = Some(BigDecimal::from(2));

    let breakdown = compute(&inputs(), &attendance(0, 130), &rates()).unwrap();
    let custom_breakdown = compute(&inputs(), &attendance(0, 130), &custom).unwrap();

    // 10 billable minutes at 2/min vs the derived 0.4166../min
    assert_eq!(custom_breakdown.late_penalty, money(20));
    assert!(breakdown.late_penalty < custom_breakdown.late_penalty);
}

#[test]
fn overtime_is_priced_at_the_multiplier() {
    let mut summary = attendance(0, 0);
    summary.overtime_minutes = 120;

    let breakdown = compute(&inputs(), &summary, &rates()).unwrap();

    // 120 min * 2x * 0.41666../min = 100
    assert_eq!(breakdown.overtime_amount, money(100));
    assert_eq!(breakdown.gross_salary, money(6600));
}

#[test]
fn net_may_go_negative_and_is_not_floored() {
    let mut heavy = inputs();
    heavy.base_salary = BigDecimal::from(100);
    heavy.total_allowances = BigDecimal::zero();
    heavy.social_insurance = BigDecimal::from(300);
    heavy.tax_amount = BigDecimal::from(100);

    let breakdown = compute(&heavy, &attendance(0, 0), &rates()).unwrap();
    assert_eq!(breakdown.net_salary, money(-300));
}

#[test]
fn net_always_equals_gross_minus_deductions_insurance_tax() {
    let mut varied = inputs();
    varied.bonuses = BigDecimal::from(250);
    varied.manual_deductions = BigDecimal::from(75);

    let breakdown = compute(&varied, &attendance(2, 300), &rates()).unwrap();

    let expected = &breakdown.gross_salary
        - &breakdown.total_deductions
        - &breakdown.social_insurance
        - &breakdown.tax_amount;
    assert_eq!(breakdown.net_salary, round_money(expected));
}

#[test]
fn negative_base_salary_is_rejected() {
    let mut invalid = inputs();
    invalid.base_salary = BigDecimal::from(-1);

    let err = compute(&invalid, &attendance(0, 0), &rates()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn negative_attendance_counters_are_rejected() {
    let err = compute(&inputs(), &attendance(-1, 0), &rates()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = compute(&inputs(), &attendance(0, -10), &rates()).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn monetary_outputs_are_rounded_to_cents() {
    let mut odd = inputs();
    odd.base_salary = BigDecimal::from(1000);

    // daily rate 33.333..; one absent day rounds to 33.33
    let breakdown = compute(&odd, &attendance(1, 0), &rates()).unwrap();
    assert_eq!(
        breakdown.attendance_deduction,
        "33.33".parse::<BigDecimal>().unwrap()
    );
}
