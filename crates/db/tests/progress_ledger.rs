//! Integration tests for the per-user step status ledger.

use careerpath_core::profile::StepStatus;
use careerpath_db::models::user::CreateUser;
use careerpath_db::repositories::{CareerPathRepo, StepRepo, StepStatusRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            first_name: Some("Test".to_string()),
            last_name: Some("User".to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

async fn first_step(pool: &PgPool) -> i64 {
    let path = &CareerPathRepo::list(pool).await.unwrap()[0];
    StepRepo::list_by_path(pool, path.id).await.unwrap()[0].id
}

async fn row_count(pool: &PgPool, user_id: i64, step_id: i64) -> i64 {
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM user_step_statuses WHERE user_id = $1 AND step_id = $2",
    )
    .bind(user_id)
    .bind(step_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn first_toggle_completes_the_step(pool: PgPool) {
    let user = new_user(&pool, "toggle@example.com").await;
    let step = first_step(&pool).await;

    assert!(StepStatusRepo::find(&pool, user, step).await.unwrap().is_none());

    let row = StepStatusRepo::toggle(&pool, user, step).await.unwrap();
    assert!(row.is_completed());
    assert!(row.completed_at.is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn toggling_twice_restores_not_started(pool: PgPool) {
    let user = new_user(&pool, "twice@example.com").await;
    let step = first_step(&pool).await;

    StepStatusRepo::toggle(&pool, user, step).await.unwrap();
    let row = StepStatusRepo::toggle(&pool, user, step).await.unwrap();

    assert_eq!(row.status(), StepStatus::NotStarted);
    assert!(row.completed_at.is_none());
    assert_eq!(row_count(&pool, user, step).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn set_status_keeps_original_completion_time(pool: PgPool) {
    let user = new_user(&pool, "keep@example.com").await;
    let step = first_step(&pool).await;

    let first = StepStatusRepo::set_status(&pool, user, step, StepStatus::Completed)
        .await
        .unwrap();
    let again = StepStatusRepo::set_status(&pool, user, step, StepStatus::Completed)
        .await
        .unwrap();
    assert_eq!(first.completed_at, again.completed_at);

    let cleared = StepStatusRepo::set_status(&pool, user, step, StepStatus::NotStarted)
        .await
        .unwrap();
    assert!(cleared.completed_at.is_none());
    assert_eq!(row_count(&pool, user, step).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn concurrent_toggles_never_duplicate_rows(pool: PgPool) {
    let user = new_user(&pool, "race@example.com").await;
    let step = first_step(&pool).await;

    let (a, b) = tokio::join!(
        StepStatusRepo::toggle(&pool, user, step),
        StepStatusRepo::toggle(&pool, user, step),
    );
    a.unwrap();
    b.unwrap();

    assert_eq!(row_count(&pool, user, step).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn completed_ids_are_per_user(pool: PgPool) {
    let alice = new_user(&pool, "alice@example.com").await;
    let bob = new_user(&pool, "bob@example.com").await;
    let step = first_step(&pool).await;

    StepStatusRepo::toggle(&pool, alice, step).await.unwrap();

    assert_eq!(
        StepStatusRepo::completed_step_ids(&pool, alice).await.unwrap(),
        vec![step]
    );
    assert!(StepStatusRepo::completed_step_ids(&pool, bob)
        .await
        .unwrap()
        .is_empty());
}
