//! Domain error type shared by the db and api crates.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The user's subscription does not include a premium feature.
    #[error("{feature} is not included in the {plan} plan")]
    FeatureUnavailable {
        feature: &'static str,
        plan: &'static str,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
