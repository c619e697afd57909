use uuid::Uuid;

use crate::database::models::{
    BulkPayFailure, BulkPayReport, EditPayrollInput, PayrollLine, PayrollStatus, PaymentMethod,
};
use crate::database::repositories::PayrollRepository;
use crate::error::AppError;
use crate::payroll::calculator::{self, PayBreakdown};

const SUBMITTABLE: &[PayrollStatus] = &[PayrollStatus::Draft];
const APPROVABLE: &[PayrollStatus] = &[PayrollStatus::Draft, PayrollStatus::PendingApproval];
const CANCELLABLE: &[PayrollStatus] = &[
    PayrollStatus::Draft,
    PayrollStatus::PendingApproval,
    PayrollStatus::Approved,
];

/// Enforces the payroll state machine against the store. Every transition is
/// a single status-guarded UPDATE, so concurrent callers cannot both pass
/// the same check.
#[derive(Clone)]
pub struct PayrollLifecycle {
    payroll: PayrollRepository,
}

impl PayrollLifecycle {
    pub fn new(payroll: PayrollRepository) -> Self {
        Self { payroll }
    }

    pub async fn submit(&self, id: Uuid) -> Result<PayrollLine, AppError> {
        self.transition(id, SUBMITTABLE, PayrollStatus::PendingApproval, "submit")
            .await
    }

    pub async fn approve(&self, id: Uuid) -> Result<PayrollLine, AppError> {
        self.transition(id, APPROVABLE, PayrollStatus::Approved, "approve")
            .await
    }

    pub async fn cancel(&self, id: Uuid) -> Result<PayrollLine, AppError> {
        self.transition(id, CANCELLABLE, PayrollStatus::Cancelled, "cancel")
            .await
    }

    pub async fn pay(&self, id: Uuid, method: PaymentMethod) -> Result<PayrollLine, AppError> {
        match self.payroll.mark_paid(id, method).await? {
            Some(line) => Ok(line),
            None => Err(self.rejection(id, "pay").await),
        }
    }

    /// Pay many lines, collecting per-id outcomes. A failure on one id never
    /// blocks the rest, and the batch call itself always succeeds.
    pub async fn bulk_pay(&self, ids: &[Uuid], method: PaymentMethod) -> BulkPayReport {
        let mut report = BulkPayReport::default();

        for &id in ids {
            match self.pay(id, method).await {
                Ok(line) => report.paid.push(line.id),
                Err(err) => report.failed.push(BulkPayFailure {
                    id,
                    reason: err.to_string(),
                }),
            }
        }

        report
    }

    /// Edit a draft line's components and recompute its totals. The
    /// attendance-derived deductions stay as generated; only the guarded
    /// update persists, so an edit racing a status change loses cleanly.
    pub async fn edit(&self, id: Uuid, input: EditPayrollInput) -> Result<PayrollLine, AppError> {
        let line = self
            .payroll
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("payroll line {} not found", id)))?;

        if !line.status.editable() {
            return Err(AppError::InvalidState(format!(
                "cannot edit a {} payroll line",
                line.status
            )));
        }

        let mut breakdown = PayBreakdown::from(&line);
        apply_field(&mut breakdown.base_salary, input.base_salary, "base salary")?;
        apply_field(
            &mut breakdown.total_allowances,
            input.total_allowances,
            "total allowances",
        )?;
        apply_field(
            &mut breakdown.overtime_amount,
            input.overtime_amount,
            "overtime amount",
        )?;
        apply_field(&mut breakdown.bonuses, input.bonuses, "bonuses")?;
        apply_field(
            &mut breakdown.manual_deductions,
            input.manual_deductions,
            "manual deductions",
        )?;
        apply_field(
            &mut breakdown.social_insurance,
            input.social_insurance,
            "social insurance",
        )?;
        apply_field(&mut breakdown.tax_amount, input.tax_amount, "tax amount")?;
        breakdown.recompute_totals();

        match self.payroll.apply_edit(id, &breakdown).await? {
            Some(updated) => Ok(updated),
            None => Err(self.rejection(id, "edit").await),
        }
    }

    async fn transition(
        &self,
        id: Uuid,
        from: &[PayrollStatus],
        to: PayrollStatus,
        action: &str,
    ) -> Result<PayrollLine, AppError> {
        match self.payroll.transition(id, from, to).await? {
            Some(line) => Ok(line),
            None => Err(self.rejection(id, action).await),
        }
    }

    /// A guarded update that matched nothing is either a missing line or a
    /// wrong-state line; look again to report which.
    async fn rejection(&self, id: Uuid, action: &str) -> AppError {
        match self.payroll.find_by_id(id).await {
            Ok(Some(line)) => AppError::InvalidState(format!(
                "cannot {} a {} payroll line",
                action, line.status
            )),
            Ok(None) => AppError::NotFound(format!("payroll line {} not found", id)),
            Err(err) => err,
        }
    }
}

fn apply_field(
    target: &mut bigdecimal::BigDecimal,
    value: Option<bigdecimal::BigDecimal>,
    label: &str,
) -> Result<(), AppError> {
    if let Some(value) = value {
        calculator::ensure_non_negative(label, &value)?;
        *target = value;
    }
    Ok(())
}
