//! Starter pack entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// A row from the `starter_packs` table. At most one live row exists per
/// creator; generation upserts (last write wins).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StarterPack {
    pub id: DbId,
    pub creator_id: DbId,
    /// Generated content sections (captions, scripts, hooks, ...).
    pub sections_json: serde_json::Value,
    /// `draft`, `final`, `sent`, or `approved`.
    pub status: String,
    pub generated_by: Option<DbId>,
    pub sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a freshly generated pack.
#[derive(Debug, Deserialize)]
pub struct UpsertStarterPack {
    pub creator_id: DbId,
    pub sections_json: serde_json::Value,
    pub generated_by: DbId,
}
