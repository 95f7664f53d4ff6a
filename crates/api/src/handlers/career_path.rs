//! Handlers for the `/career-paths` resource, plus the curriculum loader
//! shared with the dashboard.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::progress::{MilestoneOutline, PathOutline};
use careerpath_core::recommend::ResourceCandidate;
use careerpath_core::types::DbId;
use careerpath_db::models::career_path::CareerPath;
use careerpath_db::models::milestone::Milestone;
use careerpath_db::models::resource::Resource;
use careerpath_db::models::step::Step;
use careerpath_db::repositories::{CareerPathRepo, MilestoneRepo, ResourceRepo, StepRepo};
use careerpath_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Curriculum loading
// ---------------------------------------------------------------------------

/// One career path with its milestones, steps and resources, each list in
/// display order.
#[derive(Debug, Clone)]
pub struct Curriculum {
    pub path: CareerPath,
    pub milestones: Vec<Milestone>,
    pub steps: Vec<Step>,
    pub resources: Vec<Resource>,
}

impl Curriculum {
    /// Load a path's full curriculum. `None` if the path does not exist.
    pub async fn load(pool: &DbPool, path_id: DbId) -> AppResult<Option<Self>> {
        let Some(path) = CareerPathRepo::find_by_id(pool, path_id).await? else {
            return Ok(None);
        };
        let milestones = MilestoneRepo::list_by_path(pool, path_id).await?;
        let steps = StepRepo::list_by_path(pool, path_id).await?;
        let resources = ResourceRepo::list_by_path(pool, path_id).await?;

        Ok(Some(Self {
            path,
            milestones,
            steps,
            resources,
        }))
    }

    /// Steps grouped by milestone id, order preserved.
    pub fn steps_by_milestone(&self) -> HashMap<DbId, Vec<&Step>> {
        let mut grouped: HashMap<DbId, Vec<&Step>> = HashMap::new();
        for step in &self.steps {
            grouped.entry(step.milestone_id).or_default().push(step);
        }
        grouped
    }

    /// Resources grouped by step id, order preserved.
    pub fn resources_by_step(&self) -> HashMap<DbId, Vec<&Resource>> {
        let mut grouped: HashMap<DbId, Vec<&Resource>> = HashMap::new();
        for resource in &self.resources {
            grouped.entry(resource.step_id).or_default().push(resource);
        }
        grouped
    }

    /// The shape the progress aggregator consumes.
    pub fn outline(&self) -> PathOutline {
        let steps = self.steps_by_milestone();
        PathOutline {
            path_id: self.path.id,
            milestones: self
                .milestones
                .iter()
                .map(|m| MilestoneOutline {
                    milestone_id: m.id,
                    steps: steps
                        .get(&m.id)
                        .map(|s| s.iter().map(|step| step.outline()).collect())
                        .unwrap_or_default(),
                })
                .collect(),
        }
    }

    /// The shape the resource recommender consumes.
    pub fn candidates(&self) -> Vec<ResourceCandidate> {
        self.resources.iter().map(Resource::candidate).collect()
    }
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct CareerPathDetail {
    #[serde(flatten)]
    pub path: CareerPath,
    pub milestones: Vec<MilestoneNode>,
}

#[derive(Debug, Serialize)]
pub struct MilestoneNode {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub steps: Vec<StepNode>,
}

#[derive(Debug, Serialize)]
pub struct StepNode {
    #[serde(flatten)]
    pub step: Step,
    pub resources: Vec<Resource>,
}

impl From<Curriculum> for CareerPathDetail {
    fn from(curriculum: Curriculum) -> Self {
        let steps = curriculum.steps_by_milestone();
        let resources = curriculum.resources_by_step();

        let milestones = curriculum
            .milestones
            .iter()
            .map(|m| MilestoneNode {
                milestone: m.clone(),
                steps: steps
                    .get(&m.id)
                    .into_iter()
                    .flatten()
                    .map(|&step| StepNode {
                        step: step.clone(),
                        resources: resources
                            .get(&step.id)
                            .into_iter()
                            .flatten()
                            .map(|&r| r.clone())
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            path: curriculum.path.clone(),
            milestones,
        }
    }
}

// ---------------------------------------------------------------------------
// GET /career-paths
// ---------------------------------------------------------------------------

pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let paths = CareerPathRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: paths }))
}

// ---------------------------------------------------------------------------
// GET /career-paths/{id}
// ---------------------------------------------------------------------------

/// A path with its ordered milestones, steps and resources.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let curriculum = Curriculum::load(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CareerPath",
            id,
        }))?;

    tracing::debug!(
        path_id = id,
        steps = curriculum.steps.len(),
        "Loaded career path curriculum"
    );

    Ok(Json(DataResponse {
        data: CareerPathDetail::from(curriculum),
    }))
}
