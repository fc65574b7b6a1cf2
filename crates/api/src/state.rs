use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Note what is deliberately NOT here: the BB gateway client and the data
/// mode. Both derive from the persisted settings row and are resolved per
/// request (see [`crate::gateway`]), so a settings save takes effect on the
/// next request without any cache invalidation.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: creatorhub_db::DbPool,
    /// Server configuration (JWT secrets, AI backend, timeouts).
    pub config: Arc<ServerConfig>,
}
