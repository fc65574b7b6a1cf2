//! Starter-pack handlers: generate, review, send.
//!
//! Generation enforces the readiness gate server-side (100% required
//! sections AND live mode) against a fresh profile fetch, so a stale
//! client snapshot can never slip an incomplete creator through. The
//! `sent` status is written only after the gateway confirms the push.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use creatorhub_core::completion::{can_generate, completion, REQUIRED_SECTIONS};
use creatorhub_core::error::CoreError;
use creatorhub_core::starter_pack::{
    build_prompt_context, validate_send, validate_status_transition, PackStatus,
};
use creatorhub_core::types::DbId;
use creatorhub_db::models::starter_pack::{StarterPack, UpsertStarterPack};
use creatorhub_db::repositories::{CreatorRepo, StarterPackRepo};

use crate::ai::AiClient;
use crate::error::{AppError, AppResult};
use crate::gateway::GatewayContext;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::StaffUser;
use crate::response::{DataResponse, SyncResponse};
use crate::state::AppState;

use super::creators::{load_creator_record, sync_unavailable};

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: String,
}

/// `GET /api/creators/{creator_id}/starter-pack`
pub async fn get_starter_pack(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(creator_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<StarterPack>>>> {
    let data = StarterPackRepo::find_by_creator(&state.pool, creator_id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/creators/{creator_id}/starter-pack/generate`
///
/// Fetches the profile fresh, re-checks the gate, calls the AI backend
/// once, and upserts the result as a new draft (regeneration overwrites).
pub async fn generate_starter_pack(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(creator_id): Path<DbId>,
) -> AppResult<Json<DataResponse<StarterPack>>> {
    let creator = CreatorRepo::find_by_id(&state.pool, creator_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Creator",
                id: creator_id.to_string(),
            })
        })?;

    let ctx = GatewayContext::resolve(&state.pool).await;
    if !ctx.mode.allows_live_sync() {
        return Err(AppError::Core(CoreError::NotConfigured(format!(
            "Starter pack generation requires live mode ({})",
            sync_unavailable(ctx.mode)
        ))));
    }

    // Fresh profile, never the client's snapshot.
    let (profile, _, fetch_error) =
        load_creator_record(&state, &ctx, &creator.external_id).await?;
    if let Some(error) = fetch_error {
        return Err(AppError::Core(CoreError::ExternalService(error)));
    }

    let report = completion(&profile, REQUIRED_SECTIONS);
    if !can_generate(&report, ctx.mode) {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Onboarding is {}% complete; missing sections: {}",
            report.percent,
            report.missing.join(", ")
        ))));
    }

    let context = build_prompt_context(&profile);
    let ai = AiClient::new(&state.config.ai);
    let sections = ai.generate_starter_pack(&context).await?;

    let data = StarterPackRepo::upsert(
        &state.pool,
        &UpsertStarterPack {
            creator_id,
            sections_json: sections,
            generated_by: staff.user_id,
        },
    )
    .await?;

    tracing::info!(
        user_id = staff.user_id,
        creator_id,
        pack_id = data.id,
        "Starter pack generated"
    );
    Ok(Json(DataResponse { data }))
}

/// `PATCH /api/starter-packs/{id}/status`
///
/// Review transitions only; `sent` is unreachable here by design.
pub async fn update_status(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(id): Path<DbId>,
    Json(payload): Json<StatusChangeRequest>,
) -> AppResult<Json<DataResponse<StarterPack>>> {
    let pack = find_pack(&state, id).await?;

    let from = PackStatus::from_str_value(&pack.status)?;
    let to = PackStatus::from_str_value(&payload.status)?;
    validate_status_transition(from, to)?;

    let data = StarterPackRepo::set_status(&state.pool, id, to.as_str())
        .await?
        .ok_or_else(|| pack_not_found(id))?;

    tracing::info!(
        user_id = staff.user_id,
        pack_id = id,
        from = from.as_str(),
        to = to.as_str(),
        "Starter pack status changed"
    );
    Ok(Json(DataResponse { data }))
}

/// `POST /api/starter-packs/{id}/send`
///
/// Two-step send: push the bundle through the gateway, then persist `sent`
/// only on confirmed success. A failed push leaves the pack a draft and
/// returns the failure in the envelope for retry.
pub async fn send_starter_pack(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SyncResponse>> {
    let pack = find_pack(&state, id).await?;
    let status = PackStatus::from_str_value(&pack.status)?;
    validate_send(status)?;

    let creator = CreatorRepo::find_by_id(&state.pool, pack.creator_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Creator",
                id: pack.creator_id.to_string(),
            })
        })?;

    let ctx = GatewayContext::resolve(&state.pool).await;
    let Some(client) = &ctx.client else {
        return Ok(Json(SyncResponse::fail(sync_unavailable(ctx.mode))));
    };

    let payload = json!({ "sections": pack.sections_json });
    let outcome = client
        .push_starter_pack(&creator.external_id, &payload)
        .await;

    if !outcome.success {
        return Ok(Json(outcome.into()));
    }

    let sent = StarterPackRepo::mark_sent(&state.pool, id)
        .await?
        .ok_or_else(|| pack_not_found(id))?;

    tracing::info!(
        user_id = staff.user_id,
        pack_id = id,
        external_id = %creator.external_id,
        "Starter pack sent to platform"
    );

    let data = serde_json::to_value(&sent)
        .map_err(|e| AppError::InternalError(format!("Serialization failed: {e}")))?;
    Ok(Json(SyncResponse::ok(data)))
}

async fn find_pack(state: &AppState, id: DbId) -> AppResult<StarterPack> {
    StarterPackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| pack_not_found(id))
}

fn pack_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Starter pack",
        id: id.to_string(),
    })
}
