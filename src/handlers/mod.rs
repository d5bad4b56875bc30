pub mod course_handler;
pub mod quiz_attempt_handler;

pub use course_handler::{
    generate_course, generate_course_get, health_check, service_info, usage_stats,
};
pub use quiz_attempt_handler::submit_quiz_attempt;

use actix_web::web;

/// Registers every route of the service. Shared between `main` and the
/// integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(service_info)
        .service(health_check)
        .service(generate_course)
        .service(generate_course_get)
        .service(usage_stats)
        .service(submit_quiz_attempt);
}
