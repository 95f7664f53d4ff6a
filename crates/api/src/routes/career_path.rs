//! Route definitions for the `/career-paths` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::career_path;
use crate::state::AppState;

/// Routes mounted at `/career-paths`.
///
/// ```text
/// GET /      -> list
/// GET /{id}  -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(career_path::list))
        .route("/{id}", get(career_path::get_by_id))
}
