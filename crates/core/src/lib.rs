//! Domain logic for the CareerPath backend.
//!
//! Everything in this crate is pure: callers load rows from the database
//! and pass plain values in, so the aggregation and scoring rules can be
//! tested without I/O.

#[macro_use]
mod labels;

pub mod error;
pub mod onboarding;
pub mod plan;
pub mod portfolio;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod recommend;
pub mod types;
