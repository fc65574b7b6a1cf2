//! Voice note metadata handlers. Audio bytes live in external storage;
//! the console only tracks titled pointers per creator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::voice_note::{CreateVoiceNote, VoiceNote};
use creatorhub_db::repositories::{CreatorRepo, VoiceNoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::StaffUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// `GET /api/creators/{creator_id}/voice-notes`
pub async fn list_voice_notes(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(creator_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<VoiceNote>>>> {
    ensure_creator(&state, creator_id).await?;
    let data = VoiceNoteRepo::list_for_creator(&state.pool, creator_id).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/creators/{creator_id}/voice-notes`
pub async fn create_voice_note(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(creator_id): Path<DbId>,
    Json(payload): Json<CreateVoiceNote>,
) -> AppResult<(StatusCode, Json<DataResponse<VoiceNote>>)> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }
    if payload.storage_url.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Storage URL is required".into(),
        )));
    }
    ensure_creator(&state, creator_id).await?;

    let data = VoiceNoteRepo::create(&state.pool, creator_id, staff.user_id, &payload).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// `DELETE /api/voice-notes/{id}`
pub async fn delete_voice_note(
    State(state): State<AppState>,
    _staff: StaffUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !VoiceNoteRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Voice note",
            id: id.to_string(),
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn ensure_creator(state: &AppState, creator_id: DbId) -> AppResult<()> {
    CreatorRepo::find_by_id(&state.pool, creator_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Creator",
                id: creator_id.to_string(),
            })
        })?;
    Ok(())
}
