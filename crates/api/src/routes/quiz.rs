use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quiz;
use crate::state::AppState;

/// Routes mounted at `/quiz`.
///
/// ```text
/// GET  /questions -> get_questions
/// POST /          -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(quiz::get_questions))
        .route("/", post(quiz::submit))
}
