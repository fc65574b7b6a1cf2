//! Shared response envelope types for API handlers.
//!
//! CRUD endpoints use a `{ "data": ... }` envelope ([`DataResponse`]).
//! Gateway-backed proxy endpoints use `{ "success", "data", "error" }`
//! ([`SyncResponse`]) with HTTP 200 even for expected failure conditions
//! (not configured, platform unreachable); 4xx/5xx are reserved for auth,
//! validation, and internal faults.

use serde::Serialize;
use serde_json::Value;

use creatorhub_bb::SyncOutcome;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Proxy envelope for operations that touch the external platform.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl SyncResponse {
    /// A successful proxy call.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// An expected, recoverable failure (client should offer retry).
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

impl From<SyncOutcome> for SyncResponse {
    fn from(outcome: SyncOutcome) -> Self {
        Self {
            success: outcome.success,
            data: outcome.data,
            error: outcome.error,
        }
    }
}
