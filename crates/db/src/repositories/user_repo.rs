//! Repository for the `users` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{
    CompleteOnboarding, CreateUser, UpdateProfile, UpdateSubscription, User,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, first_name, last_name, current_job_title, \
                        employment_status, target_career_path_id, interests, time_commitment, \
                        learning_style, onboarding_complete, plan, subscription_active, \
                        subscription_expires_at, last_login_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A second account with the same email in any letter case violates
    /// `uq_users_email_lower`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash, first_name, last_name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email.trim())
            .fetch_optional(pool)
            .await
    }

    /// Partially update profile fields.
    ///
    /// Names and target path use `COALESCE`. The remaining fields are
    /// `Option<Option<_>>`: an outer `Some` writes the inner value, so
    /// `Some(None)` clears the column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_profile(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                current_job_title = CASE WHEN $4 THEN $5 ELSE current_job_title END,
                employment_status = CASE WHEN $6 THEN $7 ELSE employment_status END,
                target_career_path_id = COALESCE($8, target_career_path_id),
                interests = CASE WHEN $9 THEN $10 ELSE interests END,
                time_commitment = CASE WHEN $11 THEN $12 ELSE time_commitment END,
                learning_style = CASE WHEN $13 THEN $14 ELSE learning_style END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.current_job_title.is_some())
            .bind(input.current_job_title.as_ref().and_then(|v| v.as_deref()))
            .bind(input.employment_status.is_some())
            .bind(input.employment_status.flatten().map(|v| v.label()))
            .bind(input.target_career_path_id)
            .bind(input.interests.is_some())
            .bind(input.interests.as_ref().and_then(|v| v.as_deref()))
            .bind(input.time_commitment.is_some())
            .bind(input.time_commitment.flatten().map(|v| v.label()))
            .bind(input.learning_style.is_some())
            .bind(input.learning_style.flatten().map(|v| v.label()))
            .fetch_optional(pool)
            .await
    }

    /// Store the onboarding answers and mark onboarding complete.
    pub async fn complete_onboarding(
        pool: &PgPool,
        id: DbId,
        input: &CompleteOnboarding,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                target_career_path_id = $2,
                learning_style = $3,
                time_commitment = $4,
                employment_status = COALESCE($5, employment_status),
                current_job_title = COALESCE($6, current_job_title),
                interests = COALESCE($7, interests),
                onboarding_complete = true
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.target_career_path_id)
            .bind(input.learning_style.label())
            .bind(input.time_commitment.label())
            .bind(input.employment_status.map(|v| v.label()))
            .bind(&input.current_job_title)
            .bind(&input.interests)
            .fetch_optional(pool)
            .await
    }

    /// Record a subscription change. Returns `None` if the user is missing.
    pub async fn update_subscription(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubscription,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                plan = $2,
                subscription_active = $3,
                subscription_expires_at = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(input.plan.label())
            .bind(input.active)
            .bind(input.expires_at)
            .fetch_optional(pool)
            .await
    }

    /// Set `last_login_at` to now.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
