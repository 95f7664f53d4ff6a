//! Route definitions for step progress.

use axum::routing::{post, put};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// Routes mounted at `/progress`.
///
/// ```text
/// PUT  /steps/{step_id}         -> set_step_status
/// POST /steps/{step_id}/toggle  -> toggle_step
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/steps/{step_id}", put(progress::set_step_status))
        .route("/steps/{step_id}/toggle", post(progress::toggle_step))
}
