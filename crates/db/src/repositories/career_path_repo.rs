//! Repository for the `career_paths` table.

use careerpath_core::types::DbId;
use sqlx::PgPool;

use crate::models::career_path::CareerPath;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at";

/// Read access to the seeded career paths.
pub struct CareerPathRepo;

impl CareerPathRepo {
    /// List all career paths ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CareerPath>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM career_paths ORDER BY name");
        sqlx::query_as::<_, CareerPath>(&query).fetch_all(pool).await
    }

    /// Find a career path by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CareerPath>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM career_paths WHERE id = $1");
        sqlx::query_as::<_, CareerPath>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find every career path whose name is in `names` (exact match).
    pub async fn find_by_names(
        pool: &PgPool,
        names: &[&str],
    ) -> Result<Vec<CareerPath>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM career_paths WHERE name = ANY($1) ORDER BY name");
        sqlx::query_as::<_, CareerPath>(&query)
            .bind(names)
            .fetch_all(pool)
            .await
    }
}
