//! BB connection settings handlers.
//!
//! The GET endpoint is unauthenticated so the console can resolve its mode
//! at boot before login; it only ever exposes the masked key and the
//! resolved mode. A settings read failure still answers 200 with mode
//! `error` -- the mode banner is how staff learn about the fault.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use creatorhub_bb::BbClient;
use creatorhub_core::error::CoreError;
use creatorhub_db::models::api_settings::UpdateApiSettings;
use creatorhub_db::repositories::ApiSettingsRepo;

use crate::error::{AppError, AppResult};
use crate::gateway::GatewayContext;
use crate::middleware::rbac::AdminUser;
use crate::response::{DataResponse, SyncResponse};
use crate::state::AppState;

/// `GET /api/settings`
pub async fn get_settings(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Value>>> {
    let ctx = GatewayContext::resolve(&state.pool).await;
    let data = json!({
        "mode": ctx.mode.as_str(),
        "settings": ctx.settings.as_ref().map(|s| s.to_response()),
    });
    Ok(Json(DataResponse { data }))
}

/// `PUT /api/settings`
///
/// Admin only. Omitting `api_key` keeps the stored key, so the client never
/// round-trips the secret. Returns the masked row and the freshly resolved
/// mode, which takes effect on the next request everywhere.
pub async fn update_settings(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(payload): Json<UpdateApiSettings>,
) -> AppResult<Json<DataResponse<Value>>> {
    if let Some(base_url) = &payload.base_url {
        let trimmed = base_url.trim();
        if !trimmed.is_empty() && !trimmed.starts_with("http://") && !trimmed.starts_with("https://")
        {
            return Err(AppError::Core(CoreError::Validation(
                "Base URL must start with http:// or https://".into(),
            )));
        }
    }

    ApiSettingsRepo::upsert(
        &state.pool,
        payload.base_url.as_deref().map(str::trim),
        payload.api_key.as_deref(),
        payload.mock_mode,
        admin.user_id,
    )
    .await?;

    tracing::info!(user_id = admin.user_id, "API settings updated");

    // Re-resolve so the response reflects exactly what the next request sees.
    let ctx = GatewayContext::resolve(&state.pool).await;
    let data = json!({
        "mode": ctx.mode.as_str(),
        "settings": ctx.settings.as_ref().map(|s| s.to_response()),
    });
    Ok(Json(DataResponse { data }))
}

/// `POST /api/settings/test`
///
/// Probes the platform with the stored credentials. Works even with the
/// mock flag on, so an admin can verify a connection before flipping to
/// live.
pub async fn test_connection(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<SyncResponse>> {
    let settings = ApiSettingsRepo::get(&state.pool).await?;

    let Some(settings) = settings else {
        return Ok(Json(SyncResponse::fail(
            "BB platform connection is not configured",
        )));
    };
    if settings.base_url.trim().is_empty() || settings.api_key.is_empty() {
        return Ok(Json(SyncResponse::fail(
            "BB platform connection is not configured",
        )));
    }

    let client = BbClient::new(&settings.base_url, &settings.api_key);
    let outcome = client.test_connection().await;
    Ok(Json(outcome.into()))
}
