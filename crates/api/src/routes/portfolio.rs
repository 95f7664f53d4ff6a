//! Route definitions for the `/portfolio` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`. All require the portfolio feature.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list).post(portfolio::create))
        .route(
            "/{id}",
            get(portfolio::get_by_id)
                .put(portfolio::update)
                .delete(portfolio::delete),
        )
}
