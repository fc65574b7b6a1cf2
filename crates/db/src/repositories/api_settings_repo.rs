//! Repository for the singleton `api_settings` row.

use sqlx::PgPool;

use creatorhub_core::types::DbId;

use crate::models::api_settings::ApiSettings;

const COLUMNS: &str = "id, base_url, api_key, mock_mode, updated_by, updated_at";

/// Provides read/upsert access to the global BB connection settings.
pub struct ApiSettingsRepo;

impl ApiSettingsRepo {
    /// Fetch the settings row, if one has ever been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<ApiSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM api_settings WHERE id = 1");
        sqlx::query_as::<_, ApiSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the singleton row. `api_key = None` keeps the stored key.
    ///
    /// Concurrent admin writes are not reconciled (last write wins); this
    /// is a low-frequency configuration action.
    pub async fn upsert(
        pool: &PgPool,
        base_url: Option<&str>,
        api_key: Option<&str>,
        mock_mode: Option<bool>,
        updated_by: DbId,
    ) -> Result<ApiSettings, sqlx::Error> {
        let query = format!(
            "INSERT INTO api_settings (id, base_url, api_key, mock_mode, updated_by)
             VALUES (1, COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, FALSE), $4)
             ON CONFLICT (id) DO UPDATE SET
                base_url = COALESCE($1, api_settings.base_url),
                api_key = COALESCE($2, api_settings.api_key),
                mock_mode = COALESCE($3, api_settings.mock_mode),
                updated_by = $4,
                updated_at = now()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApiSettings>(&query)
            .bind(base_url)
            .bind(api_key)
            .bind(mock_mode)
            .bind(updated_by)
            .fetch_one(pool)
            .await
    }
}
