//! HTTP-level integration tests for registration, login, refresh, logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_auth, post_json, register, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn register_returns_tokens_and_free_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "email": "New.User@Example.com", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["access_token"].is_string());
    assert!(json["data"]["refresh_token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "new.user@example.com");
    assert_eq!(json["data"]["user"]["plan"], "free");
    assert_eq!(json["data"]["user"]["onboarding_complete"], false);
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_email_in_other_case_conflicts(pool: PgPool) {
    register(common::build_test_app(pool.clone()), "dup@example.com").await;

    let body = json!({ "email": "DUP@example.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn register_rejects_short_password_and_bad_email(pool: PgPool) {
    let body = json!({ "email": "ok@example.com", "password": "short" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let body = json!({ "email": "not-an-email", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_is_case_insensitive_on_email(pool: PgPool) {
    register(common::build_test_app(pool.clone()), "case@example.com").await;

    let body = json!({ "email": "CASE@Example.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn login_with_wrong_password_is_401(pool: PgPool) {
    register(common::build_test_app(pool.clone()), "wrong@example.com").await;

    let body = json!({ "email": "wrong@example.com", "password": "incorrect-password" });
    let response = post_json(common::build_test_app(pool), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    let body = json!({ "email": "rot@example.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    let json = body_json(response).await;
    let refresh_token = json["data"]["refresh_token"].as_str().unwrap().to_string();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["data"]["refresh_token"], refresh_token.as_str());

    // The old token was revoked by the rotation.
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn logout_revokes_refresh_tokens(pool: PgPool) {
    let body = json!({ "email": "bye@example.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    let json = body_json(response).await;
    let access = json["data"]["access_token"].as_str().unwrap().to_string();
    let refresh = json["data"]["refresh_token"].as_str().unwrap().to_string();

    let response = post_auth(common::build_test_app(pool.clone()), "/api/v1/auth/logout", &access).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/refresh",
        json!({ "refresh_token": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn protected_routes_require_a_bearer_token(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/user/profile").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(common::build_test_app(pool), "/api/v1/dashboard", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}
