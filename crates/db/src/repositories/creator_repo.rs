//! Repository for the `creators` directory cache.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::creator::{Creator, UpsertCreator};

const COLUMNS: &str =
    "id, external_id, display_name, handle, profile_json, synced_at, created_at, updated_at";

/// Provides directory cache operations for creators.
pub struct CreatorRepo;

impl CreatorRepo {
    /// Upsert a directory row keyed by the platform's external id,
    /// refreshing the profile snapshot and sync timestamp.
    pub async fn upsert(pool: &PgPool, input: &UpsertCreator) -> Result<Creator, sqlx::Error> {
        let query = format!(
            "INSERT INTO creators (external_id, display_name, handle, profile_json, synced_at)
             VALUES ($1, $2, $3, $4, now())
             ON CONFLICT (external_id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                handle = EXCLUDED.handle,
                profile_json = EXCLUDED.profile_json,
                synced_at = now(),
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(&input.external_id)
            .bind(&input.display_name)
            .bind(&input.handle)
            .bind(&input.profile_json)
            .fetch_one(pool)
            .await
    }

    /// Find a creator by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE id = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a creator by the platform's external id.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM creators WHERE external_id = $1");
        sqlx::query_as::<_, Creator>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// List cached creators, optionally filtered by a case-insensitive
    /// substring match on name or handle.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Creator>, sqlx::Error> {
        match search {
            Some(term) => {
                let pattern = format!("%{}%", term.trim());
                let query = format!(
                    "SELECT {COLUMNS} FROM creators
                     WHERE display_name ILIKE $1 OR handle ILIKE $1
                     ORDER BY display_name"
                );
                sqlx::query_as::<_, Creator>(&query)
                    .bind(pattern)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!("SELECT {COLUMNS} FROM creators ORDER BY display_name");
                sqlx::query_as::<_, Creator>(&query).fetch_all(pool).await
            }
        }
    }

    /// Replace one profile section in the cached snapshot.
    pub async fn set_profile_section(
        pool: &PgPool,
        id: DbId,
        section: &str,
        value: &serde_json::Value,
    ) -> Result<Option<Creator>, sqlx::Error> {
        let query = format!(
            "UPDATE creators SET
                profile_json = jsonb_set(profile_json, ARRAY[$2]::text[], $3, true),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Creator>(&query)
            .bind(id)
            .bind(section)
            .bind(value)
            .fetch_optional(pool)
            .await
    }
}
