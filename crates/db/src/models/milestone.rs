//! Milestone entity model.

use careerpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `milestones` table. Ordered by `sequence` within a path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub career_path_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sequence: i32,
    pub created_at: Timestamp,
}
