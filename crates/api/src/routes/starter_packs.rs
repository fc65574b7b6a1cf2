//! Route definitions for the `/starter-packs` resource (staff only).

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::starter_packs;
use crate::state::AppState;

/// Routes mounted at `/starter-packs`.
///
/// ```text
/// PATCH /{id}/status -> review transition (draft -> final/approved)
/// POST  /{id}/send   -> push to the platform, then mark sent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/status", patch(starter_packs::update_status))
        .route("/{id}/send", post(starter_packs::send_starter_pack))
}
