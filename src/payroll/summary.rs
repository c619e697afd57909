use std::collections::{BTreeMap, HashSet};

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::database::models::PayrollLine;

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollSummary {
    pub total_employees: i64,
    pub total_base_salary: BigDecimal,
    pub total_allowances: BigDecimal,
    pub total_overtime: BigDecimal,
    pub total_bonuses: BigDecimal,
    pub total_deductions: BigDecimal,
    pub total_gross: BigDecimal,
    pub total_net: BigDecimal,
    pub by_status: BTreeMap<String, i64>,
}

/// Reduce a set of payroll lines into reporting totals. Scoping the lines to
/// a period (or anything else) is the caller's responsibility.
pub fn summarize(lines: &[PayrollLine]) -> PayrollSummary {
    let mut summary = PayrollSummary::default();
    let mut employees = HashSet::new();

    for line in lines {
        employees.insert(line.employee_id);
        summary.total_base_salary += &line.base_salary;
        summary.total_allowances += &line.total_allowances;
        summary.total_overtime += &line.overtime_amount;
        summary.total_bonuses += &line.bonuses;
        summary.total_deductions += &line.total_deductions;
        summary.total_gross += &line.gross_salary;
        summary.total_net += &line.net_salary;
        *summary.by_status.entry(line.status.to_string()).or_default() += 1;
    }

    summary.total_employees = employees.len() as i64;
    summary
}
