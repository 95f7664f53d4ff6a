//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod career_path_repo;
pub mod milestone_repo;
pub mod portfolio_repo;
pub mod resource_repo;
pub mod session_repo;
pub mod step_repo;
pub mod step_status_repo;
pub mod user_repo;

pub use career_path_repo::CareerPathRepo;
pub use milestone_repo::MilestoneRepo;
pub use portfolio_repo::PortfolioRepo;
pub use resource_repo::ResourceRepo;
pub use session_repo::SessionRepo;
pub use step_repo::StepRepo;
pub use step_status_repo::StepStatusRepo;
pub use user_repo::UserRepo;
