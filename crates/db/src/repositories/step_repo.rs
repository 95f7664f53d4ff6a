//! Repository for the `steps` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::step::Step;

const COLUMNS: &str =
    "id, milestone_id, name, description, sequence, estimated_time_minutes, step_type, created_at";

/// Same columns qualified with the `s` alias, for joins.
const JOINED_COLUMNS: &str = "s.id, s.milestone_id, s.name, s.description, s.sequence, \
                              s.estimated_time_minutes, s.step_type, s.created_at";

/// Read access to curriculum steps.
pub struct StepRepo;

impl StepRepo {
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Step>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM steps WHERE id = $1");
        sqlx::query_as::<_, Step>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every step of a career path, ordered by milestone then step
    /// sequence.
    pub async fn list_by_path(
        pool: &PgPool,
        career_path_id: DbId,
    ) -> Result<Vec<Step>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM steps s
             JOIN milestones m ON m.id = s.milestone_id
             WHERE m.career_path_id = $1
             ORDER BY m.sequence, m.id, s.sequence, s.id"
        );
        sqlx::query_as::<_, Step>(&query)
            .bind(career_path_id)
            .fetch_all(pool)
            .await
    }
}
