//! Repository for the `user_step_statuses` table (the progress ledger).
//!
//! Rows are created lazily: a step with no row is `not_started`. Every write
//! is a single upsert on `(user_id, step_id)`, so concurrent requests for the
//! same pair can never produce a duplicate row.

use careerpath_core::profile::StepStatus;
use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::step_status::UserStepStatus;

const COLUMNS: &str = "id, user_id, step_id, status, completed_at, updated_at";

pub struct StepStatusRepo;

impl StepStatusRepo {
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        step_id: DbId,
    ) -> Result<Option<UserStepStatus>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM user_step_statuses WHERE user_id = $1 AND step_id = $2");
        sqlx::query_as::<_, UserStepStatus>(&query)
            .bind(user_id)
            .bind(step_id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of every step the user has completed, across all paths.
    pub async fn completed_step_ids(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT step_id FROM user_step_statuses
             WHERE user_id = $1 AND status = 'completed'
             ORDER BY step_id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Set an explicit status. Re-completing an already completed step keeps
    /// its original `completed_at`.
    pub async fn set_status(
        pool: &PgPool,
        user_id: DbId,
        step_id: DbId,
        status: StepStatus,
    ) -> Result<UserStepStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_step_statuses (user_id, step_id, status, completed_at)
             VALUES ($1, $2, $3::text, CASE WHEN $3::text = 'completed' THEN NOW() END)
             ON CONFLICT (user_id, step_id) DO UPDATE SET
                status = EXCLUDED.status,
                completed_at = CASE
                    WHEN EXCLUDED.status = 'completed'
                        THEN COALESCE(user_step_statuses.completed_at, EXCLUDED.completed_at)
                    ELSE NULL
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserStepStatus>(&query)
            .bind(user_id)
            .bind(step_id)
            .bind(status.label())
            .fetch_one(pool)
            .await
    }

    /// Flip a step between `not_started` and `completed`.
    ///
    /// A step with no row counts as `not_started`, so the first toggle
    /// inserts a completed row.
    pub async fn toggle(
        pool: &PgPool,
        user_id: DbId,
        step_id: DbId,
    ) -> Result<UserStepStatus, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_step_statuses (user_id, step_id, status, completed_at)
             VALUES ($1, $2, 'completed', NOW())
             ON CONFLICT (user_id, step_id) DO UPDATE SET
                status = CASE
                    WHEN user_step_statuses.status = 'completed' THEN 'not_started'
                    ELSE 'completed'
                END,
                completed_at = CASE
                    WHEN user_step_statuses.status = 'completed' THEN NULL
                    ELSE NOW()
                END
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserStepStatus>(&query)
            .bind(user_id)
            .bind(step_id)
            .fetch_one(pool)
            .await
    }
}
