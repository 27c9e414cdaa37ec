//! Integration tests for the access gate: role extractors and `/navigate`.

mod common;

use axum::http::StatusCode;
use common::{access_token, body_json, get, get_auth, TRAINEE_EMAIL, TRAINER_EMAIL};

// ---------------------------------------------------------------------------
// Test: a trainee hitting a trainer route is sent home
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trainee_on_trainer_route_gets_403_with_redirect() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = get_auth(app, "/api/v1/trainer/trainees", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["code"], "WRONG_ROLE");
    assert_eq!(json["redirect"], "/trainee");
}

#[tokio::test]
async fn trainer_on_trainee_route_gets_403_with_redirect() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINER_EMAIL).await;

    let response = get_auth(app, "/api/v1/trainee/progress", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["redirect"], "/trainer");
}

#[tokio::test]
async fn trainer_reads_roster() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINER_EMAIL).await;

    let response = get_auth(app, "/api/v1/trainer/trainees", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 5);
}

// ---------------------------------------------------------------------------
// Test: tampered tokens are rejected with a login redirect
// ---------------------------------------------------------------------------

#[tokio::test]
async fn invalid_token_is_unauthorized() {
    let app = common::build_test_app();
    let response = get_auth(app, "/api/v1/dashboard", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["redirect"], "/login");
}

// ---------------------------------------------------------------------------
// Test: /navigate resolves views and redirects per caller
// ---------------------------------------------------------------------------

#[tokio::test]
async fn navigate_signed_out_redirects_to_login() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/navigate?path=/leaderboard").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["action"], "redirect");
    assert_eq!(json["data"]["to"], "/login");
}

#[tokio::test]
async fn navigate_root_goes_to_dashboard() {
    let app = common::build_test_app();
    let json = body_json(get(app, "/api/v1/navigate?path=/").await).await;
    assert_eq!(json["data"]["to"], "/dashboard");
}

#[tokio::test]
async fn navigate_renders_sub_module_view_for_trainee() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let response = get_auth(
        app,
        "/api/v1/navigate?path=/modules/1/sections/2",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["action"], "render");
    assert_eq!(json["data"]["view"]["view"], "sub_module");
    assert_eq!(json["data"]["view"]["module_id"], "1");
    assert_eq!(json["data"]["view"]["section_id"], "2");
}

#[tokio::test]
async fn navigate_wrong_role_redirects_home() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINEE_EMAIL).await;

    let json = body_json(get_auth(app, "/api/v1/navigate?path=/trainer", &token).await).await;
    assert_eq!(json["data"]["action"], "redirect");
    assert_eq!(json["data"]["to"], "/trainee");
}

#[tokio::test]
async fn navigate_unknown_path_offers_recovery() {
    let app = common::build_test_app();
    let token = access_token(app.clone(), TRAINER_EMAIL).await;

    let json = body_json(get_auth(app, "/api/v1/navigate?path=/no/such/page", &token).await).await;
    assert_eq!(json["data"]["view"]["view"], "not_found");
    assert_eq!(json["data"]["view"]["recovery"], "/dashboard");
}
