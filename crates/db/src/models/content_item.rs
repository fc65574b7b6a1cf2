//! Content library entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// A row from the `content_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContentItem {
    pub id: DbId,
    pub creator_id: DbId,
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub body: String,
    /// `pending` or `approved`; newly created items start `pending`.
    pub approval_status: String,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content item. Status is always `pending` on insert.
#[derive(Debug, Deserialize)]
pub struct CreateContentItem {
    pub creator_id: DbId,
    pub category: String,
    pub title: String,
    pub description: Option<String>,
    pub body: String,
}

/// DTO for partially updating a content item.
#[derive(Debug, Deserialize)]
pub struct UpdateContentItem {
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub body: Option<String>,
}
