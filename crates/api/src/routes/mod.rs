pub mod admin;
pub mod auth;
pub mod content;
pub mod creators;
pub mod health;
pub mod settings;
pub mod starter_packs;
pub mod voice_notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy (creator-scoped gateway routes take the BB external id;
/// library routes take the internal id):
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/refresh                                    refresh (public)
/// /auth/logout                                     logout (public, idempotent)
/// /auth/me                                         current user (auth required)
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update
/// /admin/users/{id}/reset-password                 reset password (POST)
/// /admin/users/{id}/roles                          assign role (POST)
/// /admin/users/{id}/roles/{role}                   revoke role (DELETE)
/// /admin/roles                                     role catalogue (GET)
///
/// /creators                                        directory (?search=)
/// /creators/{external_id}                          creator record + profile
/// /creators/{external_id}/completion               onboarding report + gate
/// /creators/{external_id}/profile/{section}        push section edit (PUT, staff)
///
/// /creators/{creator_id}/content                   list items (?category=)
/// /creators/{creator_id}/starter-pack              current pack (GET)
/// /creators/{creator_id}/starter-pack/generate     generate (POST, staff)
/// /creators/{creator_id}/voice-notes               list, create (staff)
///
/// /content                                         create item (POST, any authed)
/// /content/{id}                                    update (any authed), delete (staff)
/// /content/{id}/approve                            approve (POST, staff)
/// /content/{id}/sync                               push to platform (POST, staff)
///
/// /starter-packs/{id}/status                       review transition (PATCH, staff)
/// /starter-packs/{id}/send                         send to platform (POST, staff)
///
/// /settings                                        get (public, masked), update (PUT, admin)
/// /settings/test                                   test connection (POST, admin)
///
/// /voice-notes/{id}                                delete (staff)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .nest("/creators", creators::router())
        .nest("/content", content::router())
        .nest("/starter-packs", starter_packs::router())
        .nest("/settings", settings::router())
        .nest("/voice-notes", voice_notes::router())
}
