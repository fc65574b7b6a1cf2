//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role set
//! does not meet the minimum requirement. The role set is resolved from the
//! database on every request -- never from the token's advisory claim -- so
//! an assignment change takes effect immediately and a client-asserted role
//! is never trusted for decisions affecting the platform or other creators.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use creatorhub_core::error::CoreError;
use creatorhub_core::roles::ResolvedRoles;
use creatorhub_core::types::DbId;
use creatorhub_db::repositories::RoleRepo;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Resolve the authenticated user's role set from the database.
///
/// A read failure resolves to no roles (fail closed), not to an error that
/// a retry might accidentally escalate.
async fn resolve_from_db(state: &AppState, user_id: DbId) -> ResolvedRoles {
    match RoleRepo::names_for_user(&state.pool, user_id).await {
        Ok(names) => ResolvedRoles::resolve(names.iter().map(String::as_str)),
        Err(err) => {
            tracing::error!(user_id, error = %err, "Role lookup failed; treating as no roles");
            ResolvedRoles::none()
        }
    }
}

/// Requires a staff role (manager/admin/chat_team/studio_team/
/// marketing_team). Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn staff_only(StaffUser { user_id, roles }: StaffUser) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct StaffUser {
    pub user_id: DbId,
    pub roles: ResolvedRoles,
}

impl FromRequestParts<AppState> for StaffUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let roles = resolve_from_db(state, user.user_id).await;
        if !roles.is_staff {
            return Err(AppError::Core(CoreError::Forbidden(
                "Staff role required".into(),
            )));
        }
        Ok(StaffUser {
            user_id: user.user_id,
            roles,
        })
    }
}

/// Requires the `admin` role specifically. Rejects with 403 Forbidden otherwise.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user_id: DbId,
    pub roles: ResolvedRoles,
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        let roles = resolve_from_db(state, user.user_id).await;
        if !roles.is_admin() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(AdminUser {
            user_id: user.user_id,
            roles,
        })
    }
}
