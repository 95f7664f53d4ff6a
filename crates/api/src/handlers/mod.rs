//! Request handlers.
//!
//! Each submodule holds the async handler functions for one resource.
//! Handlers validate input, delegate persistence to `careerpath_db`
//! repositories and domain rules to `careerpath_core`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
pub mod career_path;
pub mod dashboard;
pub mod portfolio;
pub mod profile;
pub mod progress;
pub mod quiz;
