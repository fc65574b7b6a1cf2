//! Refresh-token session model.

use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// A row from the `sessions` table. The refresh token itself is never
/// stored, only its SHA-256 hash.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
