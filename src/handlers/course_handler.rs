use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::GenerateCourseRequest, response::ServiceInfo},
};

#[get("/")]
pub async fn service_info() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfo::current())
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "corso-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// The generation endpoint is POST-only; the browser client expects an
/// explicit 405 on GET rather than a routing 404.
#[get("/api/v1.0/middleware_chatgpt")]
pub async fn generate_course_get() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed(
        "GET method not allowed, use POST".to_string(),
    ))
}

#[post("/api/v1.0/middleware_chatgpt")]
pub async fn generate_course(
    state: web::Data<AppState>,
    request: web::Json<GenerateCourseRequest>,
    http_request: HttpRequest,
) -> Result<HttpResponse, AppError> {
    if let Some(request_id) = get_request_id(&http_request) {
        log::info!("course generation requested (request_id={request_id})");
    }

    let package = state
        .generation_service
        .generate_course(request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(package))
}

#[get("/api/v1.0/stats")]
pub async fn usage_stats(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.generation_service.usage_stats().await)
}
