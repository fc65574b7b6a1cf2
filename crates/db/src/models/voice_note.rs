//! Voice note metadata model and DTOs. Audio bytes live in external
//! storage; only the pointer is tracked here.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// A row from the `voice_notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VoiceNote {
    pub id: DbId,
    pub creator_id: DbId,
    pub title: String,
    pub storage_url: String,
    pub duration_secs: Option<i32>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for registering a voice note.
#[derive(Debug, Deserialize)]
pub struct CreateVoiceNote {
    pub title: String,
    pub storage_url: String,
    pub duration_secs: Option<i32>,
}
