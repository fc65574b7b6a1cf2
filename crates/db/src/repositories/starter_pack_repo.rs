//! Repository for the `starter_packs` table.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::starter_pack::{StarterPack, UpsertStarterPack};

const COLUMNS: &str = "id, creator_id, sections_json, status, generated_by, \
                        sent_at, created_at, updated_at";

/// Provides upsert-by-creator persistence for starter packs.
pub struct StarterPackRepo;

impl StarterPackRepo {
    /// Upsert the pack for a creator with freshly generated content.
    ///
    /// Last write wins: regeneration overwrites the sections and resets the
    /// status to `draft`.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertStarterPack,
    ) -> Result<StarterPack, sqlx::Error> {
        let query = format!(
            "INSERT INTO starter_packs (creator_id, sections_json, status, generated_by)
             VALUES ($1, $2, 'draft', $3)
             ON CONFLICT (creator_id) DO UPDATE SET
                sections_json = EXCLUDED.sections_json,
                status = 'draft',
                generated_by = EXCLUDED.generated_by,
                sent_at = NULL,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StarterPack>(&query)
            .bind(input.creator_id)
            .bind(&input.sections_json)
            .bind(input.generated_by)
            .fetch_one(pool)
            .await
    }

    /// Find a pack by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StarterPack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM starter_packs WHERE id = $1");
        sqlx::query_as::<_, StarterPack>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The current pack for a creator, if one exists.
    pub async fn find_by_creator(
        pool: &PgPool,
        creator_id: DbId,
    ) -> Result<Option<StarterPack>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM starter_packs WHERE creator_id = $1");
        sqlx::query_as::<_, StarterPack>(&query)
            .bind(creator_id)
            .fetch_optional(pool)
            .await
    }

    /// Set the pack status. Transition legality is validated by the caller
    /// via `creatorhub_core::starter_pack` before this runs.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<StarterPack>, sqlx::Error> {
        let query = format!(
            "UPDATE starter_packs SET status = $2, updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StarterPack>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Mark a pack `sent`, stamping `sent_at`. Called only after the
    /// gateway has confirmed the external push succeeded.
    pub async fn mark_sent(pool: &PgPool, id: DbId) -> Result<Option<StarterPack>, sqlx::Error> {
        let query = format!(
            "UPDATE starter_packs SET status = 'sent', sent_at = now(), updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StarterPack>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
