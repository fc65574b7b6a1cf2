//! Route definitions for the `/content` resource.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes mounted at `/content`.
///
/// ```text
/// POST   /              -> create item (any authed)
/// PATCH  /{id}          -> update item (any authed)
/// DELETE /{id}          -> delete item (staff)
/// POST   /{id}/approve  -> approve item (staff)
/// POST   /{id}/sync     -> push approved item to the platform (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(content::create_content))
        .route(
            "/{id}",
            patch(content::update_content).delete(content::delete_content),
        )
        .route("/{id}/approve", post(content::approve_content))
        .route("/{id}/sync", post(content::sync_content))
}
