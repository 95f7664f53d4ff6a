//! Repository for the `milestones` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::milestone::Milestone;

const COLUMNS: &str = "id, career_path_id, name, description, sequence, created_at";

/// Read access to path milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// List a path's milestones in display order.
    pub async fn list_by_path(
        pool: &PgPool,
        career_path_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM milestones WHERE career_path_id = $1 ORDER BY sequence, id"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(career_path_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
