pub mod auth;
pub mod career_path;
pub mod dashboard;
pub mod health;
pub mod portfolio;
pub mod progress;
pub mod quiz;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (requires auth)
///
/// /career-paths                                    list (public)
/// /career-paths/{id}                               path with curriculum (public)
///
/// /user/profile                                    get, update (auth required)
/// /user/onboarding                                 submit onboarding (PUT)
/// /user/features                                   plan and feature access
///
/// /dashboard                                       progress and recommendations
///
/// /progress/steps/{step_id}                        set status (PUT)
/// /progress/steps/{step_id}/toggle                 toggle status (POST)
///
/// /quiz/questions                                  question set (public)
/// /quiz                                            score answers (public, POST)
///
/// /portfolio                                       list, create (portfolio plan)
/// /portfolio/{id}                                  get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/career-paths", career_path::router())
        .nest("/user", user::router())
        .nest("/dashboard", dashboard::router())
        .nest("/progress", progress::router())
        .nest("/quiz", quiz::router())
        .nest("/portfolio", portfolio::router())
}
