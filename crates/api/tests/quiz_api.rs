//! Integration tests for module quizzes.

mod common;

use axum::http::StatusCode;
use common::{access_token, body_json, get_auth, post_json_auth, TRAINEE_EMAIL, TRAINER_EMAIL};
use serde_json::json;

const MODULE_1_QUIZ: &str = "/api/v1/trainee/modules/1/quiz";

// ---------------------------------------------------------------------------
// Test: questions are served without the answer key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn quiz_hides_answer_key() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = get_auth(app, "/api/v1/modules/1/quiz", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let questions = json["data"]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions[0]["options"].as_array().unwrap().len() >= 2);
    assert!(questions
        .iter()
        .all(|q| q.get("correct_option_index").is_none()));
}

#[tokio::test]
async fn module_without_quiz_is_404() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = get_auth(app, "/api/v1/modules/4/quiz", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: scoring bands
// ---------------------------------------------------------------------------

#[tokio::test]
async fn all_correct_is_perfect() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = post_json_auth(
        app,
        MODULE_1_QUIZ,
        &token,
        json!({ "answers": [1, 1, 1, 2, 0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["correct_count"], 5);
    assert_eq!(json["data"]["total_count"], 5);
    assert_eq!(json["data"]["remark"], "perfect");
    assert_eq!(json["data"]["message"], "Perfect score! Excellent work!");
}

#[tokio::test]
async fn four_of_five_is_great() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let json = body_json(
        post_json_auth(app, MODULE_1_QUIZ, &token, json!({ "answers": [1, 1, 1, 2, 1] })).await,
    )
    .await;
    assert_eq!(json["data"]["correct_count"], 4);
    assert_eq!(json["data"]["remark"], "great");
    assert_eq!(json["data"]["results"][4]["correct"], false);
    assert_eq!(json["data"]["results"][4]["correct_option_index"], 0);
}

#[tokio::test]
async fn three_of_five_needs_practice() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let json = body_json(
        post_json_auth(app, MODULE_1_QUIZ, &token, json!({ "answers": [1, 1, 1, 0, 1] })).await,
    )
    .await;
    assert_eq!(json["data"]["correct_count"], 3);
    assert_eq!(json["data"]["remark"], "practice-more");
}

// ---------------------------------------------------------------------------
// Test: incomplete and malformed submissions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unanswered_questions_block_scoring() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = post_json_auth(
        app,
        MODULE_1_QUIZ,
        &token,
        json!({ "answers": [1, null, 1, null, 0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INCOMPLETE_ANSWERS");
    assert_eq!(json["unanswered"], json!([1, 3]));
}

#[tokio::test]
async fn wrong_answer_count_is_rejected() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = post_json_auth(app, MODULE_1_QUIZ, &token, json!({ "answers": [1, 1] })).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn out_of_range_option_is_rejected() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = post_json_auth(
        app,
        MODULE_1_QUIZ,
        &token,
        json!({ "answers": [1, 1, 1, 2, 9] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn trainers_cannot_submit() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINER_EMAIL).await;

    let response = post_json_auth(
        app,
        MODULE_1_QUIZ,
        &token,
        json!({ "answers": [1, 1, 1, 2, 0] }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
