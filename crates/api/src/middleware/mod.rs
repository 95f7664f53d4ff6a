//! Authentication and plan-gating extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`plan::RequirePortfolio`] -- Requires a current plan that includes the portfolio.

pub mod auth;
pub mod plan;
