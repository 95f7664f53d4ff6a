//! Portfolio item entity model and DTOs.

use careerpath_core::portfolio::ItemType;
use careerpath_core::types::{nullable, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portfolio_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub item_type: String,
    pub link_url: Option<String>,
    pub file_filename: Option<String>,
    pub associated_step_id: Option<DbId>,
    pub associated_milestone_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio item. The owner comes from the session.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `Other` if omitted.
    pub item_type: Option<ItemType>,
    pub link_url: Option<String>,
    pub file_filename: Option<String>,
    pub associated_step_id: Option<DbId>,
    pub associated_milestone_id: Option<DbId>,
}

/// DTO for updating a portfolio item.
///
/// Absent fields are left unchanged. Description, link, file name and the
/// step/milestone associations can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub item_type: Option<ItemType>,
    #[serde(default, deserialize_with = "nullable")]
    pub link_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub file_filename: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub associated_step_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub associated_milestone_id: Option<Option<DbId>>,
}
