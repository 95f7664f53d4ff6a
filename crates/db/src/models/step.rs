//! Step entity model.

use careerpath_core::progress::StepOutline;
use careerpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `steps` table. Ordered by `sequence` within a milestone.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Step {
    pub id: DbId,
    pub milestone_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub sequence: i32,
    pub estimated_time_minutes: Option<i32>,
    pub step_type: Option<String>,
    pub created_at: Timestamp,
}

impl Step {
    /// The fields the progress aggregator needs.
    pub fn outline(&self) -> StepOutline {
        StepOutline {
            step_id: self.id,
            estimated_time_minutes: self.estimated_time_minutes,
        }
    }
}
