use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::database::models::{
    BulkPayRequest, EditPayrollInput, GenerateRequest, PayRequest, PayrollQuery, PayrollStatus,
    PeriodQuery,
};
use crate::database::repositories::PayrollRepository;
use crate::database::utils::period_bounds;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::payroll::summary::summarize;
use crate::services::{PayrollGenerator, PayrollLifecycle};

/// Bulk generation for one period. `forceRegenerate` is the documented
/// destructive path: it discards manual edits on existing draft lines.
pub async fn generate_payroll(
    generator: web::Data<PayrollGenerator>,
    payload: web::Json<GenerateRequest>,
) -> Result<HttpResponse, AppError> {
    let report = generator
        .generate(payload.month, payload.year, payload.force_regenerate)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}

pub async fn get_payroll_lines(
    repo: web::Data<PayrollRepository>,
    query: web::Query<PayrollQuery>,
) -> Result<HttpResponse, AppError> {
    period_bounds(query.month, query.year)?;

    let status = match &query.status {
        Some(raw) => Some(
            raw.parse::<PayrollStatus>()
                .map_err(AppError::InvalidInput)?,
        ),
        None => None,
    };

    let lines = repo
        .list_for_period(query.month, query.year, status, query.employee_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(lines)))
}

pub async fn get_payroll_summary(
    repo: web::Data<PayrollRepository>,
    query: web::Query<PeriodQuery>,
) -> Result<HttpResponse, AppError> {
    period_bounds(query.month, query.year)?;

    let lines = repo
        .list_for_period(query.month, query.year, None, None)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(summarize(&lines))))
}

pub async fn get_payroll_projection(
    generator: web::Data<PayrollGenerator>,
    path: web::Path<Uuid>,
    query: web::Query<PeriodQuery>,
) -> Result<HttpResponse, AppError> {
    let projection = generator
        .project(path.into_inner(), query.month, query.year)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(projection)))
}

pub async fn get_payroll_line(
    repo: web::Data<PayrollRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let line_id = path.into_inner();

    let line = repo
        .find_by_id(line_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("payroll line {} not found", line_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn edit_payroll_line(
    lifecycle: web::Data<PayrollLifecycle>,
    path: web::Path<Uuid>,
    input: web::Json<EditPayrollInput>,
) -> Result<HttpResponse, AppError> {
    let line = lifecycle.edit(path.into_inner(), input.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn submit_payroll_line(
    lifecycle: web::Data<PayrollLifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let line = lifecycle.submit(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn approve_payroll_line(
    lifecycle: web::Data<PayrollLifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let line = lifecycle.approve(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn cancel_payroll_line(
    lifecycle: web::Data<PayrollLifecycle>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let line = lifecycle.cancel(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn pay_payroll_line(
    lifecycle: web::Data<PayrollLifecycle>,
    path: web::Path<Uuid>,
    payload: web::Json<PayRequest>,
) -> Result<HttpResponse, AppError> {
    let line = lifecycle
        .pay(path.into_inner(), payload.payment_method)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(line)))
}

pub async fn bulk_pay_payroll_lines(
    lifecycle: web::Data<PayrollLifecycle>,
    payload: web::Json<BulkPayRequest>,
) -> Result<HttpResponse, AppError> {
    let report = lifecycle
        .bulk_pay(&payload.ids, payload.payment_method)
        .await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
}
