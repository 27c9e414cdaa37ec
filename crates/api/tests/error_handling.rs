//! `AppError` to HTTP response mapping.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::body_json;
use onboardpro_api::error::AppError;
use onboardpro_core::access::DenyReason;
use onboardpro_core::error::CoreError;
use onboardpro_core::roles::Role;

// ---------------------------------------------------------------------------
// Test: domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_points_at_recovery_view() {
    let response = AppError::Core(CoreError::not_found("Module", "42")).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["redirect"], "/dashboard");
}

#[tokio::test]
async fn unavailable_is_retryable() {
    let response =
        AppError::Core(CoreError::Unavailable("catalog timed out".into())).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAVAILABLE");
    assert_eq!(json["retryable"], true);
}

#[tokio::test]
async fn incomplete_answers_lists_unanswered() {
    let response = AppError::Core(CoreError::IncompleteAnswers {
        unanswered: vec![0, 4],
    })
    .into_response();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["unanswered"], serde_json::json!([0, 4]));
    assert!(json.get("retryable").is_none());
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let response =
        AppError::Core(CoreError::Internal("lock poisoned at 0xdead".into())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: access gate denials
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthenticated_redirects_to_login() {
    let response = AppError::from(DenyReason::Unauthenticated).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHENTICATED");
    assert_eq!(json["redirect"], "/login");
}

#[tokio::test]
async fn wrong_role_redirects_home() {
    let reason = DenyReason::WrongRole {
        required: Role::Trainer,
        actual: Role::Trainee,
    };
    let response = AppError::from(reason).into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "WRONG_ROLE");
    assert_eq!(json["redirect"], "/trainee");
}
