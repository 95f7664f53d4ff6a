use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /   -> get_dashboard   (?path_id= to view another path)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::get_dashboard))
}
