use actix_web::{HttpResponse, web};

use crate::database::models::AttendanceDayInput;
use crate::database::repositories::AttendanceRepository;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn record_attendance(
    repo: web::Data<AttendanceRepository>,
    input: web::Json<AttendanceDayInput>,
) -> Result<HttpResponse, AppError> {
    let day = repo.record_day(input.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(day)))
}
