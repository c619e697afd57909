use chrono::NaiveDate;
use regex::Regex;

use crate::error::AppError;

/// Rewrite `?` placeholders into the `$1, $2, ...` form Postgres expects,
/// collapsing whitespace so queries can be written as indented blocks.
pub fn sql(query: &str) -> String {
    let cleaned = query.split_whitespace().collect::<Vec<&str>>().join(" ");
    let re = Regex::new(r"\?").expect("static placeholder pattern");
    let mut param_index = 1;
    let mut result = cleaned;
    while let Some(mat) = re.find(&result) {
        let replacement = format!("${}", param_index);
        result.replace_range(mat.range(), &replacement);
        param_index += 1;
    }
    result
}

/// Half-open [first day, first day of next month) date range for a payroll
/// period. Rejects out-of-range months before any query runs.
pub fn period_bounds(month: i32, year: i32) -> Result<(NaiveDate, NaiveDate), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::InvalidInput(format!(
            "month must be between 1 and 12, got {}",
            month
        )));
    }

    let start = NaiveDate::from_ymd_opt(year, month as u32, 1);
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month as u32 + 1, 1)
    };

    match (start, end) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(AppError::InvalidInput(format!(
            "invalid payroll period {}-{}",
            year, month
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_placeholders_in_order() {
        let query = sql("SELECT * FROM payroll_lines WHERE month = ? AND year = ?");
        assert_eq!(
            query,
            "SELECT * FROM payroll_lines WHERE month = $1 AND year = $2"
        );
    }

    #[test]
    fn collapses_indentation() {
        let query = sql(
            r#"
            SELECT id
            FROM employees
            WHERE email = ?
            "#,
        );
        assert_eq!(query, "SELECT id FROM employees WHERE email = $1");
    }

    #[test]
    fn period_bounds_cover_december_rollover() {
        let (start, end) = period_bounds(12, 2025).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn period_bounds_reject_month_zero() {
        assert!(period_bounds(0, 2025).is_err());
        assert!(period_bounds(13, 2025).is_err());
    }
}
