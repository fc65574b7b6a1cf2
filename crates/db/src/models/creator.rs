//! Creator directory cache model and DTOs.
//!
//! The BB platform owns creator profile data; rows here are a local cache
//! of the directory plus the last normalized profile snapshot, refreshed
//! whenever a live fetch succeeds.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// A row from the `creators` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Creator {
    pub id: DbId,
    /// The BB platform's identifier for this creator.
    pub external_id: String,
    pub display_name: String,
    pub handle: String,
    /// Canonical (normalized) profile snapshot.
    pub profile_json: serde_json::Value,
    /// When the snapshot was last refreshed from the platform.
    pub synced_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a directory row after a live fetch.
#[derive(Debug, Deserialize)]
pub struct UpsertCreator {
    pub external_id: String,
    pub display_name: String,
    pub handle: String,
    pub profile_json: serde_json::Value,
}
