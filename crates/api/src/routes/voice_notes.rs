//! Route definitions for the `/voice-notes` resource (staff only).
//!
//! List/create live under `/creators/{creator_id}/voice-notes`.

use axum::routing::delete;
use axum::Router;

use crate::handlers::voice_notes;
use crate::state::AppState;

/// Routes mounted at `/voice-notes`.
///
/// ```text
/// DELETE /{id} -> delete voice note
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(voice_notes::delete_voice_note))
}
