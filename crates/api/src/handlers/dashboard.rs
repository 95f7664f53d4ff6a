//! Handler for the user dashboard.
//!
//! Loads the curriculum of the chosen path together with the user's
//! completed steps and profile, then hands them to the pure aggregator and
//! recommender in `careerpath_core`.

use std::collections::{BTreeSet, HashSet};

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::plan::FeatureAccess;
use careerpath_core::progress::{aggregate_progress, Completion, ProgressSummary};
use careerpath_core::recommend::recommend_resources;
use careerpath_core::types::DbId;
use careerpath_db::models::career_path::CareerPath;
use careerpath_db::models::milestone::Milestone;
use careerpath_db::models::resource::Resource;
use careerpath_db::models::step::Step;
use careerpath_db::models::user::User;
use careerpath_db::repositories::StepStatusRepo;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::career_path::Curriculum;
use super::profile::load_user;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /dashboard`.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    /// Show a different path than the user's target (for browsing).
    pub path_id: Option<DbId>,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub first_name: Option<String>,
    pub onboarding_complete: bool,
    /// `None` when the user has not chosen a path.
    pub career_path: Option<CareerPath>,
    pub progress: ProgressSummary,
    pub milestones: Vec<DashboardMilestone>,
    pub recommended_resource_ids: BTreeSet<DbId>,
    pub features: FeatureAccess,
}

#[derive(Debug, Serialize)]
pub struct DashboardMilestone {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub completion: Completion,
    pub steps: Vec<DashboardStep>,
}

#[derive(Debug, Serialize)]
pub struct DashboardStep {
    #[serde(flatten)]
    pub step: Step,
    pub completed: bool,
    pub resources: Vec<DashboardResource>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResource {
    #[serde(flatten)]
    pub resource: Resource,
    pub recommended: bool,
}

// ---------------------------------------------------------------------------
// GET /dashboard
// ---------------------------------------------------------------------------

pub async fn get_dashboard(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(request): Query<DashboardRequest>,
) -> AppResult<impl IntoResponse> {
    let user = load_user(&state.pool, auth.user_id).await?;

    let curriculum = match request.path_id.or(user.target_career_path_id) {
        Some(path_id) => {
            let loaded = Curriculum::load(&state.pool, path_id).await?;
            if loaded.is_none() && request.path_id.is_some() {
                return Err(AppError::Core(CoreError::NotFound {
                    entity: "CareerPath",
                    id: path_id,
                }));
            }
            loaded
        }
        None => None,
    };

    let completed: HashSet<DbId> = StepStatusRepo::completed_step_ids(&state.pool, user.id)
        .await?
        .into_iter()
        .collect();

    let view = build_view(&user, curriculum, &completed);

    tracing::debug!(
        user_id = auth.user_id,
        has_path = view.progress.has_path,
        percent = view.progress.overall_percent_complete,
        recommended = view.recommended_resource_ids.len(),
        "Built dashboard"
    );

    Ok(Json(DataResponse { data: view }))
}

/// Assemble the dashboard from already-loaded data.
fn build_view(
    user: &User,
    curriculum: Option<Curriculum>,
    completed: &HashSet<DbId>,
) -> DashboardView {
    let features = user.subscription().access(Utc::now());
    let commitment = user.time_commitment();

    let Some(curriculum) = curriculum else {
        return DashboardView {
            first_name: user.first_name.clone(),
            onboarding_complete: user.onboarding_complete,
            career_path: None,
            progress: aggregate_progress(None, completed, commitment.as_ref()),
            milestones: Vec::new(),
            recommended_resource_ids: BTreeSet::new(),
            features,
        };
    };

    let outline = curriculum.outline();
    let progress = aggregate_progress(Some(&outline), completed, commitment.as_ref());
    let recommended = recommend_resources(
        &curriculum.candidates(),
        user.learning_style(),
        user.interests.as_deref(),
    );

    let steps = curriculum.steps_by_milestone();
    let resources = curriculum.resources_by_step();

    let milestones = curriculum
        .milestones
        .iter()
        .map(|m| DashboardMilestone {
            milestone: m.clone(),
            completion: progress.milestones.get(&m.id).copied().unwrap_or_default(),
            steps: steps
                .get(&m.id)
                .into_iter()
                .flatten()
                .map(|&step| DashboardStep {
                    step: step.clone(),
                    completed: progress.completed_step_ids.contains(&step.id),
                    resources: resources
                        .get(&step.id)
                        .into_iter()
                        .flatten()
                        .map(|&r| DashboardResource {
                            resource: r.clone(),
                            recommended: recommended.contains(&r.id),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    DashboardView {
        first_name: user.first_name.clone(),
        onboarding_complete: user.onboarding_complete,
        career_path: Some(curriculum.path.clone()),
        progress,
        milestones,
        recommended_resource_ids: recommended,
        features,
    }
}
