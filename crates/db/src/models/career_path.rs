//! Career path entity model.

use careerpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `career_paths` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CareerPath {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}
