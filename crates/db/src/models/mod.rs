//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create / update DTOs where the entity is writable

pub mod career_path;
pub mod milestone;
pub mod portfolio;
pub mod resource;
pub mod session;
pub mod step;
pub mod step_status;
pub mod user;
