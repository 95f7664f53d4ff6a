//! Subscription-plan extractors.
//!
//! Each extractor wraps [`AuthUser`], loads the user's subscription, and
//! rejects with 403 `FEATURE_UNAVAILABLE` unless the plan is current and
//! includes the feature.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use careerpath_core::error::CoreError;
use careerpath_core::plan::Feature;
use careerpath_db::repositories::UserRepo;
use chrono::Utc;

use super::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Requires access to the portfolio feature.
///
/// ```ignore
/// async fn list(RequirePortfolio(auth): RequirePortfolio) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePortfolio(pub AuthUser);

impl FromRequestParts<AppState> for RequirePortfolio {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_feature(state, &user, Feature::Portfolio).await?;
        Ok(RequirePortfolio(user))
    }
}

/// Check that `auth`'s current subscription includes `feature`.
pub async fn require_feature(state: &AppState, auth: &AuthUser, feature: Feature) -> AppResult<()> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    user.subscription().require(feature, Utc::now()).map_err(|err| {
        tracing::debug!(user_id = auth.user_id, feature = %feature, "Feature gated by plan");
        AppError::Core(err)
    })
}
