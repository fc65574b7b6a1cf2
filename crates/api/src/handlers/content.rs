//! Content library handlers.
//!
//! Items live locally and start `pending`; approval is one-way and pushing
//! an item to the platform requires both prior approval and live mode.
//! Input validation runs before any row is written. Any authenticated user
//! can create and edit items; approve, delete, and push are staff actions.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use creatorhub_core::content::{validate_category, validate_title, STATUS_APPROVED};
use creatorhub_core::error::CoreError;
use creatorhub_core::types::DbId;
use creatorhub_db::models::content_item::{ContentItem, CreateContentItem, UpdateContentItem};
use creatorhub_db::repositories::{ContentItemRepo, CreatorRepo};

use crate::error::{AppError, AppResult};
use crate::gateway::GatewayContext;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::StaffUser;
use crate::response::{DataResponse, SyncResponse};
use crate::state::AppState;

use super::creators::sync_unavailable;

#[derive(Debug, Deserialize)]
pub struct ContentListQuery {
    /// Optional category/folder filter.
    pub category: Option<String>,
}

/// `GET /api/creators/{creator_id}/content`
pub async fn list_content(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(creator_id): Path<DbId>,
    Query(query): Query<ContentListQuery>,
) -> AppResult<Json<DataResponse<Vec<ContentItem>>>> {
    find_creator(&state, creator_id).await?;
    let data =
        ContentItemRepo::list_for_creator(&state.pool, creator_id, query.category.as_deref())
            .await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/content`
pub async fn create_content(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateContentItem>,
) -> AppResult<(StatusCode, Json<DataResponse<ContentItem>>)> {
    validate_title(&payload.title)?;
    validate_category(&payload.category)?;
    find_creator(&state, payload.creator_id).await?;

    let data = ContentItemRepo::create(&state.pool, &payload).await?;
    tracing::info!(
        user_id = user.user_id,
        content_id = data.id,
        creator_id = data.creator_id,
        "Content item created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// `PATCH /api/content/{id}`
pub async fn update_content(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateContentItem>,
) -> AppResult<Json<DataResponse<ContentItem>>> {
    if let Some(title) = &payload.title {
        validate_title(title)?;
    }
    if let Some(category) = &payload.category {
        validate_category(category)?;
    }

    let data = ContentItemRepo::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| content_not_found(id))?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/content/{id}/approve`
///
/// One-way transition; approving twice is a conflict, not an idempotent
/// success, so a stale screen learns the item already moved on.
pub async fn approve_content(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ContentItem>>> {
    match ContentItemRepo::approve(&state.pool, id, staff.user_id).await? {
        Some(data) => {
            tracing::info!(user_id = staff.user_id, content_id = id, "Content approved");
            Ok(Json(DataResponse { data }))
        }
        None => {
            // Missing row and already-approved row both come back None;
            // disambiguate for the client.
            match ContentItemRepo::find_by_id(&state.pool, id).await? {
                Some(_) => Err(AppError::Core(CoreError::Conflict(
                    "Content item is already approved".into(),
                ))),
                None => Err(content_not_found(id)),
            }
        }
    }
}

/// `DELETE /api/content/{id}`
pub async fn delete_content(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if !ContentItemRepo::delete(&state.pool, id).await? {
        return Err(content_not_found(id));
    }
    tracing::info!(user_id = staff.user_id, content_id = id, "Content deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/content/{id}/sync`
///
/// Pushes an approved item to the platform. Requires live mode; mode and
/// approval are both checked here, server-side.
pub async fn sync_content(
    State(state): State<AppState>,
    staff: StaffUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<SyncResponse>> {
    let item = ContentItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| content_not_found(id))?;

    if item.approval_status != STATUS_APPROVED {
        return Err(AppError::Core(CoreError::Conflict(
            "Only approved content can be pushed to the platform".into(),
        )));
    }

    let creator = find_creator(&state, item.creator_id).await?;

    let ctx = GatewayContext::resolve(&state.pool).await;
    let Some(client) = &ctx.client else {
        return Ok(Json(SyncResponse::fail(sync_unavailable(ctx.mode))));
    };

    let payload = json!({
        "category": item.category,
        "title": item.title,
        "description": item.description,
        "body": item.body,
    });
    let outcome = client.push_content(&creator.external_id, &payload).await;
    if outcome.success {
        tracing::info!(
            user_id = staff.user_id,
            content_id = id,
            external_id = %creator.external_id,
            "Content pushed to platform"
        );
    }
    Ok(Json(outcome.into()))
}

async fn find_creator(
    state: &AppState,
    creator_id: DbId,
) -> AppResult<creatorhub_db::models::creator::Creator> {
    CreatorRepo::find_by_id(&state.pool, creator_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Creator",
                id: creator_id.to_string(),
            })
        })
}

fn content_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Content item",
        id: id.to_string(),
    })
}
