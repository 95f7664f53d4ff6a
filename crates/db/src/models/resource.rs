//! Learning resource entity model.

use careerpath_core::recommend::ResourceCandidate;
use careerpath_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub step_id: DbId,
    pub name: String,
    pub url: String,
    /// Free-form tag ("Video", "Article", ...) used only for recommendations.
    pub resource_type: Option<String>,
    pub created_at: Timestamp,
}

impl Resource {
    pub fn candidate(&self) -> ResourceCandidate {
        ResourceCandidate {
            resource_id: self.id,
            name: self.name.clone(),
            resource_type: self.resource_type.clone(),
        }
    }
}
