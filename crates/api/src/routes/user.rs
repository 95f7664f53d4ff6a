//! Route definitions for the authenticated user's own resources.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

/// Routes mounted at `/user`.
///
/// ```text
/// GET  /profile     -> get_profile
/// PUT  /profile     -> update_profile
/// PUT  /onboarding  -> complete_onboarding
/// GET  /features    -> get_features
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/onboarding", put(profile::complete_onboarding))
        .route("/features", get(profile::get_features))
}
