use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::Result;

use payroll_be::database::{
    init_database,
    repositories::{AttendanceRepository, EmployeeRepository, PayrollRepository},
};
use payroll_be::handlers::{attendance, employees, payroll};
use payroll_be::middleware::RequestId;
use payroll_be::services::{PayrollGenerator, PayrollLifecycle};
use payroll_be::Config;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Payroll API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!("configuration loaded (environment: {})", config.environment);

    let pool = init_database(&config.database_url).await?;
    log::info!("database initialized");

    let employee_repository = EmployeeRepository::new(pool.clone());
    let attendance_repository = AttendanceRepository::new(pool.clone());
    let payroll_repository = PayrollRepository::new(pool.clone());

    let generator = PayrollGenerator::new(
        employee_repository.clone(),
        attendance_repository.clone(),
        payroll_repository.clone(),
        config.rates.clone(),
    );
    let lifecycle = PayrollLifecycle::new(payroll_repository.clone());

    let employee_repo_data = web::Data::new(employee_repository);
    let attendance_repo_data = web::Data::new(attendance_repository);
    let payroll_repo_data = web::Data::new(payroll_repository);
    let generator_data = web::Data::new(generator);
    let lifecycle_data = web::Data::new(lifecycle);
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    log::info!("server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(employee_repo_data.clone())
            .app_data(attendance_repo_data.clone())
            .app_data(payroll_repo_data.clone())
            .app_data(generator_data.clone())
            .app_data(lifecycle_data.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin("http://localhost:3000")
                    .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                    .allowed_headers(vec![
                        "Authorization",
                        "Content-Type",
                        "Accept",
                        "X-Correlation-ID",
                    ])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .service(
                web::scope("/api/v1")
                    .service(
                        web::scope("/employees")
                            .route("", web::post().to(employees::create_employee))
                            .route("", web::get().to(employees::get_employees))
                            .route("/{id}", web::get().to(employees::get_employee)),
                    )
                    .service(
                        web::scope("/attendance")
                            .route("", web::post().to(attendance::record_attendance)),
                    )
                    .service(
                        web::scope("/payroll")
                            .route("/generate", web::post().to(payroll::generate_payroll))
                            .route("", web::get().to(payroll::get_payroll_lines))
                            .route("/summary", web::get().to(payroll::get_payroll_summary))
                            .route(
                                "/projection/{employee_id}",
                                web::get().to(payroll::get_payroll_projection),
                            )
                            .route("/bulk-pay", web::post().to(payroll::bulk_pay_payroll_lines))
                            .route("/{id}", web::get().to(payroll::get_payroll_line))
                            .route("/{id}", web::put().to(payroll::edit_payroll_line))
                            .route("/{id}/submit", web::post().to(payroll::submit_payroll_line))
                            .route(
                                "/{id}/approve",
                                web::post().to(payroll::approve_payroll_line),
                            )
                            .route("/{id}/pay", web::post().to(payroll::pay_payroll_line))
                            .route(
                                "/{id}/cancel",
                                web::post().to(payroll::cancel_payroll_line),
                            ),
                    ),
            )
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("server error: {}", e))
}
