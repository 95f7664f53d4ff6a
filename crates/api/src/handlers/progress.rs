//! Handlers for per-step progress (`/progress/steps/{step_id}`).

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::profile::StepStatus;
use careerpath_core::types::DbId;
use careerpath_db::repositories::{StepRepo, StepStatusRepo};
use careerpath_db::DbPool;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /progress/steps/{step_id}`.
#[derive(Debug, Deserialize)]
pub struct SetStepStatusRequest {
    pub status: StepStatus,
}

// ---------------------------------------------------------------------------
// POST /progress/steps/{step_id}/toggle
// ---------------------------------------------------------------------------

/// Flip a step between `not_started` and `completed`.
pub async fn toggle_step(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_step_exists(&state.pool, step_id).await?;

    let row = StepStatusRepo::toggle(&state.pool, auth.user_id, step_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        step_id,
        status = %row.status(),
        "Step status toggled"
    );

    Ok(Json(DataResponse { data: row }))
}

// ---------------------------------------------------------------------------
// PUT /progress/steps/{step_id}
// ---------------------------------------------------------------------------

/// Set an explicit status for a step.
pub async fn set_step_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(step_id): Path<DbId>,
    Json(input): Json<SetStepStatusRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_step_exists(&state.pool, step_id).await?;

    let row = StepStatusRepo::set_status(&state.pool, auth.user_id, step_id, input.status).await?;

    tracing::info!(
        user_id = auth.user_id,
        step_id,
        status = %input.status,
        "Step status set"
    );

    Ok(Json(DataResponse { data: row }))
}

async fn ensure_step_exists(pool: &DbPool, step_id: DbId) -> AppResult<()> {
    StepRepo::find_by_id(pool, step_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Step",
            id: step_id,
        }))?;
    Ok(())
}
