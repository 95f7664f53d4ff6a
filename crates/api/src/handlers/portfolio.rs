//! Handlers for the `/portfolio` resource.
//!
//! Every endpoint requires a plan that includes the portfolio feature and
//! only ever touches the caller's own items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use careerpath_core::error::CoreError;
use careerpath_core::onboarding::normalize_text;
use careerpath_core::portfolio::{validate_file_name, validate_link_url, validate_title};
use careerpath_core::types::DbId;
use careerpath_db::models::portfolio::{CreatePortfolioItem, UpdatePortfolioItem};
use careerpath_db::repositories::PortfolioRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::plan::RequirePortfolio;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "PortfolioItem",
        id,
    })
}

fn validate_links(link_url: Option<&str>, file_filename: Option<&str>) -> Result<(), CoreError> {
    if let Some(url) = link_url {
        validate_link_url(url)?;
    }
    if let Some(name) = file_filename {
        validate_file_name(name)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// GET /portfolio
// ---------------------------------------------------------------------------

pub async fn list(
    RequirePortfolio(auth): RequirePortfolio,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let items = PortfolioRepo::list_by_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// POST /portfolio
// ---------------------------------------------------------------------------

pub async fn create(
    RequirePortfolio(auth): RequirePortfolio,
    State(state): State<AppState>,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    let input = CreatePortfolioItem {
        title: input.title.trim().to_string(),
        description: normalize_text(input.description.as_deref()),
        link_url: normalize_text(input.link_url.as_deref()),
        file_filename: normalize_text(input.file_filename.as_deref()),
        ..input
    };
    validate_title(&input.title)?;
    validate_links(input.link_url.as_deref(), input.file_filename.as_deref())?;

    let item = PortfolioRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, item_id = item.id, "Portfolio item created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

// ---------------------------------------------------------------------------
// GET /portfolio/{id}
// ---------------------------------------------------------------------------

pub async fn get_by_id(
    RequirePortfolio(auth): RequirePortfolio,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let item = PortfolioRepo::find_for_user(&state.pool, auth.user_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// PUT /portfolio/{id}
// ---------------------------------------------------------------------------

pub async fn update(
    RequirePortfolio(auth): RequirePortfolio,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioItem>,
) -> AppResult<impl IntoResponse> {
    // Blank text clears the column.
    let input = UpdatePortfolioItem {
        title: input.title.as_deref().map(|t| t.trim().to_string()),
        description: input.description.map(|v| normalize_text(v.as_deref())),
        link_url: input.link_url.map(|v| normalize_text(v.as_deref())),
        file_filename: input.file_filename.map(|v| normalize_text(v.as_deref())),
        ..input
    };
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    validate_links(
        input.link_url.as_ref().and_then(|v| v.as_deref()),
        input.file_filename.as_ref().and_then(|v| v.as_deref()),
    )?;

    let item = PortfolioRepo::update_for_user(&state.pool, auth.user_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = auth.user_id, item_id = id, "Portfolio item updated");

    Ok(Json(DataResponse { data: item }))
}

// ---------------------------------------------------------------------------
// DELETE /portfolio/{id}
// ---------------------------------------------------------------------------

pub async fn delete(
    RequirePortfolio(auth): RequirePortfolio,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PortfolioRepo::delete_for_user(&state.pool, auth.user_id, id).await? {
        tracing::info!(user_id = auth.user_id, item_id = id, "Portfolio item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
