//! Repository for the `resources` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::resource::Resource;

const JOINED_COLUMNS: &str =
    "r.id, r.step_id, r.name, r.url, r.resource_type, r.created_at";

/// Read access to learning resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// List every resource attached to any step of a career path, in
    /// curriculum order.
    pub async fn list_by_path(
        pool: &PgPool,
        career_path_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM resources r
             JOIN steps s ON s.id = r.step_id
             JOIN milestones m ON m.id = s.milestone_id
             WHERE m.career_path_id = $1
             ORDER BY m.sequence, m.id, s.sequence, s.id, r.id"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(career_path_id)
            .fetch_all(pool)
            .await
    }
}
