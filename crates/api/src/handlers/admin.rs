//! Admin-only user and role administration handlers.
//!
//! Every handler here is gated by the [`AdminUser`] extractor; the role set
//! is resolved from the database per request, so revoking `admin` takes
//! effect immediately.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use creatorhub_core::error::CoreError;
use creatorhub_core::roles::VALID_ROLES;
use creatorhub_core::types::DbId;
use creatorhub_db::models::role::RoleRow;
use creatorhub_db::models::user::{CreateUser, UpdateUser, UserResponse};
use creatorhub_db::repositories::{RoleRepo, SessionRepo, UserRepo};

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::AdminUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Minimum accepted password length for staff accounts.
const MIN_PASSWORD_LENGTH: usize = 12;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Role names to assign on creation (optional).
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResetPasswordRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleChangeRequest {
    pub role: String,
}

/// `GET /api/admin/users`
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let rows = UserRepo::list(&state.pool).await?;
    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        data.push(super::user_response(&state.pool, row).await?);
    }
    Ok(Json(DataResponse { data }))
}

/// `POST /api/admin/users`
pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let username = payload.username.trim();
    if username.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username is required".into(),
        )));
    }
    validate_password_strength(&payload.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    // Reject unknown role names before any row is written.
    let mut role_rows = Vec::with_capacity(payload.roles.len());
    for name in &payload.roles {
        let role = lookup_role(&state, name).await?;
        role_rows.push(role);
    }

    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            email: payload.email.trim().to_string(),
            password_hash,
        },
    )
    .await?;

    for role in &role_rows {
        RoleRepo::assign(&state.pool, user.id, role.id).await?;
    }

    tracing::info!(user_id = user.id, username, "User created");
    let data = super::user_response(&state.pool, user).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// `GET /api/admin/users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = find_user(&state, id).await?;
    let data = super::user_response(&state.pool, user).await?;
    Ok(Json(DataResponse { data }))
}

/// `PATCH /api/admin/users/{id}`
///
/// Deactivating a user also revokes every active refresh session.
pub async fn update_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateUser>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let deactivating = payload.is_active == Some(false);
    let user = UserRepo::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    if deactivating {
        let revoked = SessionRepo::revoke_all_for_user(&state.pool, id).await?;
        tracing::info!(user_id = id, revoked, "User deactivated; sessions revoked");
    }

    let data = super::user_response(&state.pool, user).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/admin/users/{id}/reset-password`
///
/// Also clears any lockout and revokes active sessions.
pub async fn reset_password(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<StatusCode> {
    validate_password_strength(&payload.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    find_user(&state, id).await?;
    let password_hash = hash_password(&payload.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    UserRepo::set_password_hash(&state.pool, id, &password_hash).await?;
    SessionRepo::revoke_all_for_user(&state.pool, id).await?;

    tracing::info!(user_id = id, "Password reset");
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/admin/roles`
pub async fn list_roles(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<DataResponse<Vec<RoleRow>>>> {
    let data = RoleRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// `POST /api/admin/users/{id}/roles`
pub async fn assign_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<DbId>,
    Json(payload): Json<RoleChangeRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = find_user(&state, id).await?;
    let role = lookup_role(&state, &payload.role).await?;
    RoleRepo::assign(&state.pool, id, role.id).await?;

    tracing::info!(user_id = id, role = %payload.role, "Role assigned");
    let data = super::user_response(&state.pool, user).await?;
    Ok(Json(DataResponse { data }))
}

/// `DELETE /api/admin/users/{id}/roles/{role}`
pub async fn revoke_role(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path((id, role_name)): Path<(DbId, String)>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let user = find_user(&state, id).await?;
    let role = lookup_role(&state, &role_name).await?;
    RoleRepo::revoke(&state.pool, id, role.id).await?;

    tracing::info!(user_id = id, role = %role_name, "Role revoked");
    let data = super::user_response(&state.pool, user).await?;
    Ok(Json(DataResponse { data }))
}

async fn find_user(state: &AppState, id: DbId) -> AppResult<creatorhub_db::models::user::User> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))
}

async fn lookup_role(state: &AppState, name: &str) -> AppResult<RoleRow> {
    RoleRepo::find_by_name(&state.pool, name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown role '{name}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            )))
        })
}

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "User",
        id: id.to_string(),
    })
}
