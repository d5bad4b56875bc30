use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use corso_server::{app_state::AppState, config::Config, handlers};

fn mock_state() -> web::Data<AppState> {
    let config = Config {
        use_mock_model: true,
        cache_ttl_secs: 0,
        ..Config::default()
    };
    web::Data::new(AppState::new(config))
}

#[actix_web::test]
async fn generate_returns_course_package_with_wire_field_names() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({
                "topic": "Artificial Intelligence",
                "num_of_questions": "1",
                "num_of_replies": "4",
                "language": "english"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["topic"], "Artificial Intelligence");
    assert!(body["sintesi"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(body["questionario"][0]["risposta_corretta"], "B");
    assert!(body["questionario"][0]["risposte"]["A"].is_string());
    assert_eq!(body["imageUrl"], "images/about_img.jpg");
}

#[actix_web::test]
async fn generate_rejects_out_of_range_question_count() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({
                "topic": "Artificial Intelligence",
                "num_of_questions": "51",
                "num_of_replies": "4",
                "language": "english"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"]
        .as_str()
        .is_some_and(|e| e.contains("between 1 and 50")));
}

#[actix_web::test]
async fn generate_rejects_unsupported_language() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({
                "topic": "Artificial Intelligence",
                "num_of_questions": "1",
                "num_of_replies": "4",
                "language": "klingon"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn get_on_generation_endpoint_is_method_not_allowed() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1.0/middleware_chatgpt")
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn unknown_route_is_not_found() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1.0/missing").to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn generated_quiz_can_be_submitted_for_grading() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let package: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({
                "topic": "Artificial Intelligence",
                "num_of_questions": "1",
                "num_of_replies": "4",
                "language": "english"
            }))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/quiz_attempts")
            .set_json(json!({
                "quiz": package["questionario"],
                "answers": [ { "question_index": 0, "selected_answer": "B" } ]
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);

    let attempt: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(attempt["total_questions"], 1);
    assert_eq!(attempt["correct_count"], 1);
    assert_eq!(attempt["score_percent"], 100);
    assert_eq!(attempt["passed"], true);
}

#[actix_web::test]
async fn stats_endpoint_counts_requests() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let _package: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({ "topic": "Artificial Intelligence" }))
            .to_request(),
    )
    .await;

    let stats: serde_json::Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/v1.0/stats").to_request(),
    )
    .await;

    assert_eq!(stats["total_requests"], 1);
    assert_eq!(stats["successful_requests"], 1);
    assert_eq!(stats["failed_requests"], 0);
}

#[actix_web::test]
async fn random_topic_request_skips_topic_validation() {
    let app = test::init_service(
        App::new().app_data(mock_state()).configure(handlers::configure),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/v1.0/middleware_chatgpt")
            .set_json(json!({
                "random_topic": "true",
                "num_of_questions": "1",
                "num_of_replies": "3",
                "language": "italian"
            }))
            .to_request(),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    // No image is generated for random topics.
    assert_eq!(body["imageUrl"], "images/about_img.jpg");
}
