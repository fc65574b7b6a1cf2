//! Authentication handlers: login, token refresh, logout, current user.
//!
//! Login failures are deliberately indistinguishable (one generic message
//! for unknown username and wrong password). Refresh tokens rotate on every
//! use: the presented session is revoked and a new one is issued, so a
//! replayed token is dead on arrival.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use creatorhub_core::error::CoreError;
use creatorhub_db::models::user::UserResponse;
use creatorhub_db::repositories::{RoleRepo, SessionRepo, UserRepo};

use crate::auth::jwt::{
    generate_access_token, generate_refresh_token, hash_refresh_token,
};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Consecutive failed logins before an account is temporarily locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;
/// Lockout duration after the attempt limit is hit.
const LOCK_DURATION_MINS: i64 = 15;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// Token pair issued by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let user = UserRepo::find_by_username(&state.pool, payload.username.trim())
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is disabled".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account temporarily locked after repeated failures. Try again later.".into(),
            )));
        }
    }

    let valid = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !valid {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let until = Utc::now() + Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failed logins");
        }
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    issue_tokens(&state, user).await.map(Json)
}

/// `POST /api/auth/refresh`
///
/// Rotates the refresh token: the presented session is revoked before a new
/// pair is issued.
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let token_hash = hash_refresh_token(&payload.refresh_token);
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Account is disabled".into())))?;

    SessionRepo::revoke(&state.pool, session.id).await?;
    issue_tokens(&state, user).await.map(Json)
}

/// `POST /api/auth/logout`
///
/// Idempotent: an unknown or already-revoked token still returns 204.
pub async fn logout(
    State(state): State<AppState>,
    Json(payload): Json<LogoutRequest>,
) -> AppResult<StatusCode> {
    let token_hash = hash_refresh_token(&payload.refresh_token);
    if let Some(session) =
        SessionRepo::find_by_refresh_token_hash(&state.pool, &token_hash).await?
    {
        SessionRepo::revoke(&state.pool, session.id).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let row = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: user.user_id.to_string(),
            })
        })?;
    let data = super::user_response(&state.pool, row).await?;
    Ok(Json(DataResponse { data }))
}

/// Generate the access/refresh pair and persist the refresh session.
async fn issue_tokens(
    state: &AppState,
    user: creatorhub_db::models::user::User,
) -> AppResult<TokenResponse> {
    let role_names = RoleRepo::names_for_user(&state.pool, user.id).await?;

    let access_token = generate_access_token(user.id, &role_names, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_plain, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);
    SessionRepo::create(&state.pool, user.id, &refresh_hash, expires_at).await?;

    let expires_in = state.config.jwt.access_token_expiry_mins * 60;
    let user = super::user_response(&state.pool, user).await?;

    Ok(TokenResponse {
        access_token,
        refresh_token: refresh_plain,
        token_type: "Bearer",
        expires_in,
        user,
    })
}
