//! Domain-level error type shared across crates.

/// Domain errors produced by core logic and the persistence layer.
///
/// The api crate maps each variant to an HTTP status and error code; raw
/// transport or database errors must be converted into one of these before
/// crossing the handler boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id came up empty. The id is stringly typed
    /// because lookups use both internal numeric ids and external platform
    /// ids.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A request failed field- or shape-level validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request conflicts with current state (e.g. an illegal status
    /// transition or duplicate row).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid identity.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but lacking the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// External platform settings are missing or incomplete.
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// The external platform was reachable but the operation failed, or it
    /// was unreachable. Always carries a human-readable message, never a
    /// raw transport error.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// An unexpected internal failure. The message is logged server-side
    /// and never shown verbatim to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}
