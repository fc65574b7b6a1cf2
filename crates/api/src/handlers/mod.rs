//! HTTP handlers, grouped by domain.

pub mod admin;
pub mod auth;
pub mod content;
pub mod creators;
pub mod settings;
pub mod starter_packs;
pub mod voice_notes;

use creatorhub_core::roles::ResolvedRoles;
use creatorhub_db::models::user::{User, UserResponse};
use creatorhub_db::repositories::RoleRepo;
use creatorhub_db::DbPool;

use crate::error::AppResult;

/// Build the safe API representation of a user, resolving the current role
/// set from the database.
pub(crate) async fn user_response(pool: &DbPool, user: User) -> AppResult<UserResponse> {
    let names = RoleRepo::names_for_user(pool, user.id).await?;
    let resolved = ResolvedRoles::resolve(names.iter().map(String::as_str));
    Ok(UserResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        roles: names,
        is_staff: resolved.is_staff,
        is_active: user.is_active,
        last_login_at: user.last_login_at,
        created_at: user.created_at,
    })
}
