//! Route definitions for the `/admin` resource (admin role required).

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /users                       -> list users
/// POST   /users                       -> create user
/// GET    /users/{id}                  -> get user
/// PATCH  /users/{id}                  -> update user
/// POST   /users/{id}/reset-password   -> reset password
/// POST   /users/{id}/roles            -> assign role
/// DELETE /users/{id}/roles/{role}     -> revoke role
/// GET    /roles                       -> role catalogue
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(admin::list_users).post(admin::create_user))
        .route(
            "/users/{id}",
            get(admin::get_user).patch(admin::update_user),
        )
        .route("/users/{id}/reset-password", post(admin::reset_password))
        .route("/users/{id}/roles", post(admin::assign_role))
        .route("/users/{id}/roles/{role}", delete(admin::revoke_role))
        .route("/roles", get(admin::list_roles))
}
