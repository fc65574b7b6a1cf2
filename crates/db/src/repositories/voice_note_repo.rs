//! Repository for the `voice_notes` table.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::voice_note::{CreateVoiceNote, VoiceNote};

const COLUMNS: &str = "id, creator_id, title, storage_url, duration_secs, created_by, created_at";

/// Provides CRUD operations for voice note metadata.
pub struct VoiceNoteRepo;

impl VoiceNoteRepo {
    /// Register a voice note pointer for a creator.
    pub async fn create(
        pool: &PgPool,
        creator_id: DbId,
        created_by: DbId,
        input: &CreateVoiceNote,
    ) -> Result<VoiceNote, sqlx::Error> {
        let query = format!(
            "INSERT INTO voice_notes (creator_id, title, storage_url, duration_secs, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VoiceNote>(&query)
            .bind(creator_id)
            .bind(&input.title)
            .bind(&input.storage_url)
            .bind(input.duration_secs)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List voice notes for a creator, newest first.
    pub async fn list_for_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Vec<VoiceNote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM voice_notes
             WHERE creator_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, VoiceNote>(&query)
            .bind(creator_id)
            .fetch_all(pool)
            .await
    }

    /// Hard-delete a voice note. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM voice_notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
