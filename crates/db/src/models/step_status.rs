//! User step status (progress ledger) model.

use careerpath_core::profile::StepStatus;
use careerpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `user_step_statuses` table.
///
/// At most one row exists per `(user_id, step_id)`; `completed_at` is set
/// exactly when `status = 'completed'` (enforced by a CHECK constraint).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserStepStatus {
    pub id: DbId,
    pub user_id: DbId,
    pub step_id: DbId,
    pub status: String,
    pub completed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl UserStepStatus {
    pub fn status(&self) -> StepStatus {
        StepStatus::from_label(&self.status).unwrap_or(StepStatus::NotStarted)
    }

    pub fn is_completed(&self) -> bool {
        self.status() == StepStatus::Completed
    }
}
