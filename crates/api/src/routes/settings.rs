//! Route definitions for the `/settings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET  /      -> masked settings + resolved mode (public)
/// PUT  /      -> update settings (admin only)
/// POST /test  -> probe the platform connection (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::get_settings).put(settings::update_settings))
        .route("/test", post(settings::test_connection))
}
