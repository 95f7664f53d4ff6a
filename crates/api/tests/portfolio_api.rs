//! HTTP-level integration tests for the plan-gated portfolio.

mod common;

use axum::http::StatusCode;
use careerpath_core::plan::Plan;
use careerpath_db::models::user::UpdateSubscription;
use careerpath_db::repositories::UserRepo;
use chrono::{Duration, Utc};
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth, register};
use serde_json::json;
use sqlx::PgPool;

async fn subscribe(pool: &PgPool, user_id: i64, plan: Plan, active: bool) {
    UserRepo::update_subscription(
        pool,
        user_id,
        &UpdateSubscription {
            plan,
            active,
            expires_at: Some(Utc::now() + Duration::days(30)),
        },
    )
    .await
    .unwrap()
    .unwrap();
}

#[sqlx::test(migrations = "../db/migrations")]
async fn free_plan_is_forbidden(pool: PgPool) {
    let (_, token) = register(common::build_test_app(pool.clone()), "free@example.com").await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/portfolio", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FEATURE_UNAVAILABLE");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn inactive_subscription_is_forbidden(pool: PgPool) {
    let (user_id, token) = register(common::build_test_app(pool.clone()), "lapsed@example.com").await;
    subscribe(&pool, user_id, Plan::Premium, false).await;

    let response = get_auth(common::build_test_app(pool), "/api/v1/portfolio", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn starter_subscriber_can_manage_items(pool: PgPool) {
    let (user_id, token) = register(common::build_test_app(pool.clone()), "folio@example.com").await;
    subscribe(&pool, user_id, Plan::Starter, true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/portfolio",
        json!({
            "title": "  Sales dashboard ",
            "item_type": "Project",
            "link_url": "https://github.com/me/sales",
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();
    assert_eq!(created["data"]["title"], "Sales dashboard");
    assert_eq!(created["data"]["item_type"], "Project");

    let response = put_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/portfolio/{id}"),
        json!({ "description": "Quarterly sales in one view" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(common::build_test_app(pool.clone()), "/api/v1/portfolio", &token).await;
    let list = body_json(response).await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
    assert_eq!(list["data"][0]["description"], "Quarterly sales in one view");

    let response = delete_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/portfolio/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/v1/portfolio/{id}"),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_fields_are_rejected(pool: PgPool) {
    let (user_id, token) = register(common::build_test_app(pool.clone()), "bad@example.com").await;
    subscribe(&pool, user_id, Plan::Premium, true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/portfolio",
        json!({ "title": "   " }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json_auth(
        common::build_test_app(pool),
        "/api/v1/portfolio",
        json!({ "title": "Essay", "file_filename": "../../etc/passwd" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn items_are_scoped_to_their_owner(pool: PgPool) {
    let (owner, owner_token) = register(common::build_test_app(pool.clone()), "own@example.com").await;
    let (other, other_token) = register(common::build_test_app(pool.clone()), "oth@example.com").await;
    subscribe(&pool, owner, Plan::Starter, true).await;
    subscribe(&pool, other, Plan::Starter, true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/portfolio",
        json!({ "title": "Private work" }),
        &owner_token,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/portfolio/{id}"),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(
        common::build_test_app(pool),
        &format!("/api/v1/portfolio/{id}"),
        &other_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn null_unlinks_an_item_link(pool: PgPool) {
    let (user_id, token) = register(common::build_test_app(pool.clone()), "link@example.com").await;
    subscribe(&pool, user_id, Plan::Starter, true).await;

    let response = post_json_auth(
        common::build_test_app(pool.clone()),
        "/api/v1/portfolio",
        json!({ "title": "Blog", "link_url": "https://me.dev", "description": "Notes" }),
        &token,
    )
    .await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = put_json_auth(
        common::build_test_app(pool),
        &format!("/api/v1/portfolio/{id}"),
        json!({ "link_url": null }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["link_url"].is_null());
    assert_eq!(json["data"]["description"], "Notes");
}
