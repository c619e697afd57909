use bigdecimal::{BigDecimal, Zero};
use chrono::Utc;
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::database::models::{PayrollLine, PayrollStatus};
use crate::payroll::summary::summarize;

fn line(employee_id: Uuid, status: PayrollStatus, base: i64, net: i64) -> PayrollLine {
    let now = Utc::now();
    PayrollLine {
        id: Uuid::new_v4(),
        employee_id,
        month: 7,
        year: 2026,
        base_salary: BigDecimal::from(base),
        total_allowances: BigDecimal::from(100),
        overtime_amount: BigDecimal::zero(),
        bonuses: BigDecimal::from(50),
        absent_days: 0,
        late_minutes: 0,
        attendance_deduction: BigDecimal::zero(),
        late_penalty: BigDecimal::zero(),
        manual_deductions: BigDecimal::from(25),
        total_deductions: BigDecimal::from(25),
        social_insurance: BigDecimal::from(10),
        tax_amount: BigDecimal::from(5),
        gross_salary: BigDecimal::from(base + 150),
        net_salary: BigDecimal::from(net),
        status,
        payment_method: None,
        paid_at: None,
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn empty_input_produces_zero_totals() {
    let summary = summarize(&[]);
    assert_eq!(summary.total_employees, 0);
    assert_eq!(summary.total_net, BigDecimal::zero());
    assert!(summary.by_status.is_empty());
}

#[test]
fn sums_every_monetary_field() {
    let lines = vec![
        line(Uuid::new_v4(), PayrollStatus::Draft, 3000, 3110),
        line(Uuid::new_v4(), PayrollStatus::Draft, 2000, 2110),
    ];

    let summary = summarize(&lines);

    assert_eq!(summary.total_employees, 2);
    assert_eq!(summary.total_base_salary, BigDecimal::from(5000));
    assert_eq!(summary.total_allowances, BigDecimal::from(200));
    assert_eq!(summary.total_bonuses, BigDecimal::from(100));
    assert_eq!(summary.total_deductions, BigDecimal::from(50));
    assert_eq!(summary.total_gross, BigDecimal::from(5300));
    assert_eq!(summary.total_net, BigDecimal::from(5220));
}

#[test]
fn counts_lines_per_status() {
    let lines = vec![
        line(Uuid::new_v4(), PayrollStatus::Draft, 1000, 1000),
        line(Uuid::new_v4(), PayrollStatus::Approved, 1000, 1000),
        line(Uuid::new_v4(), PayrollStatus::Paid, 1000, 1000),
        line(Uuid::new_v4(), PayrollStatus::Paid, 1000, 1000),
    ];

    let summary = summarize(&lines);

    assert_eq!(summary.by_status.get("draft"), Some(&1));
    assert_eq!(summary.by_status.get("approved"), Some(&1));
    assert_eq!(summary.by_status.get("paid"), Some(&2));
    assert_eq!(summary.by_status.get("cancelled"), None);
}

#[test]
fn distinct_employees_are_counted_once_across_periods() {
    let employee = Uuid::new_v4();
    let mut january = line(employee, PayrollStatus::Paid, 1000, 1000);
    january.month = 1;
    let mut february = line(employee, PayrollStatus::Draft, 1000, 1000);
    february.month = 2;

    let summary = summarize(&[january, february]);

    assert_eq!(summary.total_employees, 1);
    assert_eq!(summary.total_base_salary, BigDecimal::from(2000));
}
