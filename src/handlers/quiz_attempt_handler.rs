use actix_web::{post, web, HttpResponse};

use crate::{
    errors::AppError, models::dto::request::SubmitQuizAttemptRequest,
    services::quiz_attempt_service::QuizAttemptService,
};

/// Grades a finished quiz. Stateless: the questions travel with the request,
/// so the server needs no memory of the generated package.
#[post("/api/v1.0/quiz_attempts")]
pub async fn submit_quiz_attempt(
    request: web::Json<SubmitQuizAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let attempt = QuizAttemptService::grade_attempt(&request.into_inner())?;
    Ok(HttpResponse::Created().json(attempt))
}
