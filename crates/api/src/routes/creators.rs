//! Route definitions for the `/creators` resource.
//!
//! The `{creator_id}` segment is overloaded: directory/profile routes
//! interpret it as the BB external id (string), while library routes
//! (content, starter pack, voice notes) interpret it as the internal
//! numeric id. The route-level name must be shared for the segments to
//! coexist; each handler extracts its own type.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{content, creators, starter_packs, voice_notes};
use crate::state::AppState;

/// Routes mounted at `/creators`.
///
/// ```text
/// GET  /                                      -> directory (?search=)
/// GET  /{external_id}                         -> creator record + profile
/// GET  /{external_id}/completion              -> onboarding report + gate
/// PUT  /{external_id}/profile/{section}       -> push section edit (staff)
/// GET  /{creator_id}/content                  -> content list (?category=)
/// GET  /{creator_id}/starter-pack             -> current pack
/// POST /{creator_id}/starter-pack/generate    -> generate pack (staff)
/// GET  /{creator_id}/voice-notes              -> voice note list (staff)
/// POST /{creator_id}/voice-notes              -> register voice note (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(creators::list_creators))
        .route("/{creator_id}", get(creators::get_creator))
        .route("/{creator_id}/completion", get(creators::get_completion))
        .route(
            "/{creator_id}/profile/{section}",
            put(creators::put_profile_section),
        )
        .route("/{creator_id}/content", get(content::list_content))
        .route(
            "/{creator_id}/starter-pack",
            get(starter_packs::get_starter_pack),
        )
        .route(
            "/{creator_id}/starter-pack/generate",
            post(starter_packs::generate_starter_pack),
        )
        .route(
            "/{creator_id}/voice-notes",
            get(voice_notes::list_voice_notes).post(voice_notes::create_voice_note),
        )
}
