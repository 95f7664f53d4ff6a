//! User entity model and DTOs.

use careerpath_core::plan::{Plan, Subscription};
use careerpath_core::profile::{EmploymentStatus, LearningStyle, StoredCommitment, TimeCommitment};
use careerpath_core::types::{nullable, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserProfile`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub current_job_title: Option<String>,
    pub employment_status: Option<String>,
    pub target_career_path_id: Option<DbId>,
    pub interests: Option<String>,
    pub time_commitment: Option<String>,
    pub learning_style: Option<String>,
    pub onboarding_complete: bool,
    pub plan: String,
    pub subscription_active: bool,
    pub subscription_expires_at: Option<Timestamp>,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// Stored learning style. Labels outside the known set read as "not set".
    pub fn learning_style(&self) -> Option<LearningStyle> {
        self.learning_style
            .as_deref()
            .and_then(LearningStyle::from_label)
    }

    pub fn time_commitment(&self) -> Option<StoredCommitment> {
        StoredCommitment::from_stored(self.time_commitment.as_deref())
    }

    pub fn employment_status(&self) -> Option<EmploymentStatus> {
        self.employment_status
            .as_deref()
            .and_then(EmploymentStatus::from_label)
    }

    pub fn plan(&self) -> Plan {
        Plan::from_label(&self.plan).unwrap_or(Plan::Free)
    }

    pub fn subscription(&self) -> Subscription {
        Subscription {
            plan: self.plan(),
            active: self.subscription_active,
            expires_at: self.subscription_expires_at,
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            current_job_title: self.current_job_title.clone(),
            employment_status: self.employment_status(),
            target_career_path_id: self.target_career_path_id,
            interests: self.interests.clone(),
            time_commitment: self.time_commitment.clone(),
            learning_style: self.learning_style(),
            onboarding_complete: self.onboarding_complete,
            plan: self.plan(),
            created_at: self.created_at,
        }
    }
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub current_job_title: Option<String>,
    pub employment_status: Option<EmploymentStatus>,
    pub target_career_path_id: Option<DbId>,
    pub interests: Option<String>,
    /// Raw stored label; may predate the current bucket list.
    pub time_commitment: Option<String>,
    pub learning_style: Option<LearningStyle>,
    pub onboarding_complete: bool,
    pub plan: Plan,
    pub created_at: Timestamp,
}

/// DTO for creating a new user. `email` must already be normalized.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for partially updating a profile.
///
/// Absent fields are left unchanged. The `Option<Option<T>>` fields can be
/// cleared with an explicit `null`; names cannot be cleared.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub current_job_title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub employment_status: Option<Option<EmploymentStatus>>,
    pub target_career_path_id: Option<DbId>,
    #[serde(default, deserialize_with = "nullable")]
    pub interests: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub time_commitment: Option<Option<TimeCommitment>>,
    #[serde(default, deserialize_with = "nullable")]
    pub learning_style: Option<Option<LearningStyle>>,
}

/// DTO for the onboarding form. Path, learning style, and time commitment
/// are required to finish onboarding.
#[derive(Debug, Deserialize)]
pub struct CompleteOnboarding {
    pub target_career_path_id: DbId,
    pub learning_style: LearningStyle,
    pub time_commitment: TimeCommitment,
    pub employment_status: Option<EmploymentStatus>,
    pub current_job_title: Option<String>,
    pub interests: Option<String>,
}

/// DTO for recording a subscription change from the payment layer.
#[derive(Debug, Clone)]
pub struct UpdateSubscription {
    pub plan: Plan,
    pub active: bool,
    pub expires_at: Option<Timestamp>,
}
