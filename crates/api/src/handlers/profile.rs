//! Handlers for the authenticated user's profile (`/user/...`).
//!
//! Profile fields set here (target path, learning style, interests, time
//! commitment) are the only inputs the dashboard reads.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::onboarding::{
    normalize_text, validate_current_role, validate_interests, validate_name,
};
use careerpath_core::types::DbId;
use careerpath_db::models::user::{CompleteOnboarding, UpdateProfile, User};
use careerpath_db::repositories::{CareerPathRepo, UserRepo};
use careerpath_db::DbPool;
use chrono::Utc;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /user/profile
// ---------------------------------------------------------------------------

pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = load_user(&state.pool, auth.user_id).await?;

    tracing::debug!(user_id = auth.user_id, "Fetched profile");

    Ok(Json(DataResponse {
        data: user.profile(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /user/profile
// ---------------------------------------------------------------------------

/// Partially update the profile. Omitted fields are left unchanged; `null`
/// or a blank string clears job title, interests and the enum fields.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateProfile {
        first_name: normalize_text(input.first_name.as_deref()),
        last_name: normalize_text(input.last_name.as_deref()),
        current_job_title: input.current_job_title.map(|v| normalize_text(v.as_deref())),
        interests: input.interests.map(|v| normalize_text(v.as_deref())),
        ..input
    };

    if let Some(name) = &input.first_name {
        validate_name(name, "First name")?;
    }
    if let Some(name) = &input.last_name {
        validate_name(name, "Last name")?;
    }
    validate_optional_text(
        input.current_job_title.as_ref().and_then(|v| v.as_deref()),
        input.interests.as_ref().and_then(|v| v.as_deref()),
    )?;
    if let Some(path_id) = input.target_career_path_id {
        ensure_path_exists(&state.pool, path_id).await?;
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "Profile updated");

    Ok(Json(DataResponse {
        data: user.profile(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /user/onboarding
// ---------------------------------------------------------------------------

/// Submit the onboarding form. Target path, learning style and time
/// commitment are required; the rest are optional.
pub async fn complete_onboarding(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CompleteOnboarding>,
) -> AppResult<impl IntoResponse> {
    let input = CompleteOnboarding {
        current_job_title: normalize_text(input.current_job_title.as_deref()),
        interests: normalize_text(input.interests.as_deref()),
        ..input
    };

    validate_optional_text(input.current_job_title.as_deref(), input.interests.as_deref())?;
    ensure_path_exists(&state.pool, input.target_career_path_id).await?;

    let user = UserRepo::complete_onboarding(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        path_id = input.target_career_path_id,
        learning_style = %input.learning_style,
        time_commitment = %input.time_commitment,
        "Onboarding completed"
    );

    Ok(Json(DataResponse {
        data: user.profile(),
    }))
}

// ---------------------------------------------------------------------------
// GET /user/features
// ---------------------------------------------------------------------------

/// The user's plan and which premium features it currently unlocks.
pub async fn get_features(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let user = load_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: user.subscription().access(Utc::now()),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) async fn load_user(pool: &DbPool, user_id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}

async fn ensure_path_exists(pool: &DbPool, path_id: DbId) -> AppResult<()> {
    CareerPathRepo::find_by_id(pool, path_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CareerPath",
            id: path_id,
        }))?;
    Ok(())
}

fn validate_optional_text(role: Option<&str>, interests: Option<&str>) -> Result<(), CoreError> {
    if let Some(role) = role {
        validate_current_role(role)?;
    }
    if let Some(interests) = interests {
        validate_interests(interests)?;
    }
    Ok(())
}
