use actix_web::{HttpResponse, web};
use uuid::Uuid;

use crate::database::models::{EmployeeInput, EmployeeQuery};
use crate::database::repositories::EmployeeRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn create_employee(
    repo: web::Data<EmployeeRepository>,
    input: web::Json<EmployeeInput>,
) -> Result<HttpResponse, AppError> {
    let employee = repo.create(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(employee)))
}

pub async fn get_employees(
    repo: web::Data<EmployeeRepository>,
    query: web::Query<EmployeeQuery>,
) -> Result<HttpResponse, AppError> {
    let employees = repo.list(query.active).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(employees)))
}

pub async fn get_employee(
    repo: web::Data<EmployeeRepository>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let employee_id = path.into_inner();

    let employee = repo
        .find_by_id(employee_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("employee {} not found", employee_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(employee)))
}
