use actix_web::{App, HttpResponse, test, web};

use crate::middleware::RequestId;

async fn ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[actix_rt::test]
async fn generates_a_correlation_id_when_none_is_sent() {
    let app =
        test::init_service(App::new().wrap(RequestId).route("/", web::get().to(ok))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

    let header = resp
        .headers()
        .get("x-correlation-id")
        .expect("response should carry a correlation id");
    assert!(!header.to_str().unwrap().is_empty());
}

#[actix_rt::test]
async fn echoes_a_client_supplied_correlation_id() {
    let app =
        test::init_service(App::new().wrap(RequestId).route("/", web::get().to(ok))).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header(("x-correlation-id", "req-42"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let header = resp
        .headers()
        .get("x-correlation-id")
        .expect("response should echo the correlation id");
    assert_eq!(header.to_str().unwrap(), "req-42");
}
