use uuid::Uuid;

use crate::config::PayrollRates;
use crate::database::models::{
    Employee, GenerationFailure, GenerationReport, NewPayrollLine, PayrollProjection,
    PayrollStatus,
};
use crate::database::repositories::{AttendanceRepository, EmployeeRepository, PayrollRepository};
use crate::database::utils::period_bounds;
use crate::error::AppError;
use crate::payroll::calculator::{self, PayBreakdown, PayInputs};

/// What `generate` decides to do for one employee, given whether a line
/// already exists for the period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationAction {
    Create,
    Skip,
    Regenerate,
}

/// Pure skip/regenerate/create policy. An existing line is left alone unless
/// the caller explicitly opted into the destructive regeneration path.
pub fn classify(existing: bool, force_regenerate: bool) -> GenerationAction {
    match (existing, force_regenerate) {
        (false, _) => GenerationAction::Create,
        (true, false) => GenerationAction::Skip,
        (true, true) => GenerationAction::Regenerate,
    }
}

#[derive(Clone)]
pub struct PayrollGenerator {
    employees: EmployeeRepository,
    attendance: AttendanceRepository,
    payroll: PayrollRepository,
    rates: PayrollRates,
}

enum Outcome {
    Created,
    Skipped,
    Regenerated,
}

impl PayrollGenerator {
    pub fn new(
        employees: EmployeeRepository,
        attendance: AttendanceRepository,
        payroll: PayrollRepository,
        rates: PayrollRates,
    ) -> Self {
        Self {
            employees,
            attendance,
            payroll,
            rates,
        }
    }

    /// Generate draft payroll lines for every active employee. Per-employee
    /// failures land in the report's `failed` bucket; the batch always runs
    /// to completion.
    pub async fn generate(
        &self,
        month: i32,
        year: i32,
        force_regenerate: bool,
    ) -> Result<GenerationReport, AppError> {
        period_bounds(month, year)?;

        let employees = self.employees.get_active().await?;
        let mut report = GenerationReport::default();

        for employee in employees {
            match self
                .generate_one(&employee, month, year, force_regenerate)
                .await
            {
                Ok(Outcome::Created) => report.success.push(employee.id),
                Ok(Outcome::Skipped) => report.skipped.push(employee.id),
                Ok(Outcome::Regenerated) => report.regenerated.push(employee.id),
                Err(err) => report.failed.push(GenerationFailure {
                    employee_id: employee.id,
                    reason: err.to_string(),
                }),
            }
        }

        log::info!(
            "payroll generation for {}-{}: {} created, {} skipped, {} regenerated, {} failed",
            year,
            month,
            report.success.len(),
            report.skipped.len(),
            report.regenerated.len(),
            report.failed.len()
        );

        Ok(report)
    }

    /// Non-persisted estimate for the current, still-open month. Carries no
    /// row id, so it can never enter the lifecycle.
    pub async fn project(
        &self,
        employee_id: Uuid,
        month: i32,
        year: i32,
    ) -> Result<PayrollProjection, AppError> {
        let employee = self
            .employees
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("employee {} not found", employee_id)))?;

        let breakdown = self.compute_for(&employee, month, year).await?;

        Ok(PayrollProjection {
            employee_id,
            month,
            year,
            status: PayrollStatus::Projection,
            breakdown,
        })
    }

    async fn generate_one(
        &self,
        employee: &Employee,
        month: i32,
        year: i32,
        force_regenerate: bool,
    ) -> Result<Outcome, AppError> {
        let existing = self
            .payroll
            .find_for_period(employee.id, month, year)
            .await?;

        match classify(existing.is_some(), force_regenerate) {
            GenerationAction::Skip => Ok(Outcome::Skipped),
            GenerationAction::Create => {
                let line = self.build_line(employee, month, year).await?;
                self.payroll.insert(&line).await?;
                Ok(Outcome::Created)
            }
            GenerationAction::Regenerate => {
                let line = self.build_line(employee, month, year).await?;
                self.payroll.replace(&line).await?;
                Ok(Outcome::Regenerated)
            }
        }
    }

    async fn build_line(
        &self,
        employee: &Employee,
        month: i32,
        year: i32,
    ) -> Result<NewPayrollLine, AppError> {
        let breakdown = self.compute_for(employee, month, year).await?;

        Ok(NewPayrollLine {
            employee_id: employee.id,
            month,
            year,
            breakdown,
            status: PayrollStatus::Draft,
        })
    }

    async fn compute_for(
        &self,
        employee: &Employee,
        month: i32,
        year: i32,
    ) -> Result<PayBreakdown, AppError> {
        let summary = self
            .attendance
            .summary_for_period(employee.id, month, year)
            .await?
            .ok_or_else(|| {
                AppError::InvalidInput(format!(
                    "no attendance records for employee {} in {}-{}",
                    employee.id, year, month
                ))
            })?;

        calculator::compute(&PayInputs::from(employee), &summary, &self.rates)
    }
}
