//! Repository for the `portfolio_items` table.
//!
//! Every query is scoped by `user_id`; an item owned by someone else is
//! indistinguishable from a missing one.

use careerpath_core::portfolio::ItemType;
use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{CreatePortfolioItem, PortfolioItem, UpdatePortfolioItem};

const COLUMNS: &str = "id, user_id, title, description, item_type, link_url, file_filename, \
                        associated_step_id, associated_milestone_id, created_at, updated_at";

pub struct PortfolioRepo;

impl PortfolioRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items
                (user_id, title, description, item_type, link_url, file_filename,
                 associated_step_id, associated_milestone_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.item_type.unwrap_or_default().label())
            .bind(&input.link_url)
            .bind(&input.file_filename)
            .bind(input.associated_step_id)
            .bind(input.associated_milestone_id)
            .fetch_one(pool)
            .await
    }

    /// List a user's items, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio_items
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Update an item. Title and type use `COALESCE`; the nullable fields
    /// are written whenever their outer `Option` is `Some`, so `Some(None)`
    /// unlinks them.
    pub async fn update_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET
                title = COALESCE($3, title),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                item_type = COALESCE($6, item_type),
                link_url = CASE WHEN $7 THEN $8 ELSE link_url END,
                file_filename = CASE WHEN $9 THEN $10 ELSE file_filename END,
                associated_step_id = CASE WHEN $11 THEN $12 ELSE associated_step_id END,
                associated_milestone_id =
                    CASE WHEN $13 THEN $14 ELSE associated_milestone_id END
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(input.description.is_some())
            .bind(input.description.as_ref().and_then(|v| v.as_deref()))
            .bind(input.item_type.map(ItemType::label))
            .bind(input.link_url.is_some())
            .bind(input.link_url.as_ref().and_then(|v| v.as_deref()))
            .bind(input.file_filename.is_some())
            .bind(input.file_filename.as_ref().and_then(|v| v.as_deref()))
            .bind(input.associated_step_id.is_some())
            .bind(input.associated_step_id.flatten())
            .bind(input.associated_milestone_id.is_some())
            .bind(input.associated_milestone_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete_for_user(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
