//! Starter-pack status machine and prompt context assembly.
//!
//! One generated-content bundle exists per creator (upsert-by-creator).
//! Status transitions are validated here; the api crate persists a new
//! status only after this module approves the transition, and `sent` is
//! only ever written after the external push has succeeded.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::completion::REQUIRED_SECTIONS;
use crate::error::CoreError;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_FINAL: &str = "final";
pub const STATUS_SENT: &str = "sent";
pub const STATUS_APPROVED: &str = "approved";

/// All valid pack status strings.
pub const VALID_PACK_STATUSES: &[&str] =
    &[STATUS_DRAFT, STATUS_FINAL, STATUS_SENT, STATUS_APPROVED];

/// Lifecycle status of a starter pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackStatus {
    /// Freshly generated, or reverted after a failed send.
    Draft,
    /// Staff review finished, content frozen.
    Final,
    /// Pushed to the BB platform. Set only after a confirmed gateway success.
    Sent,
    /// Staff-approved for creator use.
    Approved,
}

impl PackStatus {
    /// Parse a database status string.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_DRAFT => Ok(Self::Draft),
            STATUS_FINAL => Ok(Self::Final),
            STATUS_SENT => Ok(Self::Sent),
            STATUS_APPROVED => Ok(Self::Approved),
            _ => Err(CoreError::Validation(format!(
                "Invalid pack status '{s}'. Must be one of: {}",
                VALID_PACK_STATUSES.join(", ")
            ))),
        }
    }

    /// The database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Final => STATUS_FINAL,
            Self::Sent => STATUS_SENT,
            Self::Approved => STATUS_APPROVED,
        }
    }
}

/// Validate a staff-driven status transition (review/approve flows).
///
/// Allowed: draft -> final, draft -> approved, final -> approved. `sent` is
/// never a legal target here -- it is reachable only through the send flow,
/// which writes it after the gateway confirms success.
pub fn validate_status_transition(from: PackStatus, to: PackStatus) -> Result<(), CoreError> {
    use PackStatus::*;
    match (from, to) {
        (Draft, Final) | (Draft, Approved) | (Final, Approved) => Ok(()),
        (_, Sent) => Err(CoreError::Validation(
            "Status 'sent' is set by the send flow, not directly".to_string(),
        )),
        (from, to) => Err(CoreError::Conflict(format!(
            "Cannot transition starter pack from '{}' to '{}'",
            from.as_str(),
            to.as_str()
        ))),
    }
}

/// Validate that a pack in `status` may be sent to the external platform.
///
/// Only draft packs are sendable; a pack already `sent` is a conflict and
/// `final`/`approved` packs stay local until re-drafted upstream.
pub fn validate_send(status: PackStatus) -> Result<(), CoreError> {
    match status {
        PackStatus::Draft => Ok(()),
        PackStatus::Sent => Err(CoreError::Conflict(
            "Starter pack has already been sent".to_string(),
        )),
        other => Err(CoreError::Conflict(format!(
            "Only draft packs can be sent (current status: '{}')",
            other.as_str()
        ))),
    }
}

/// Assemble the prompt context for the one-shot AI generation call from a
/// canonical profile snapshot.
///
/// Includes every required section plus the scalar descriptors the model
/// uses for tone. Missing sections are omitted rather than sent as nulls.
pub fn build_prompt_context(profile: &Value) -> Value {
    let mut context = serde_json::Map::new();

    for &section in REQUIRED_SECTIONS {
        if let Some(v) = profile.get(section) {
            if crate::completion::section_complete(v) {
                context.insert(section.to_string(), v.clone());
            }
        }
    }
    for field in ["niche", "tone_of_voice", "posting_frequency", "content_style"] {
        if let Some(v) = profile.get(field) {
            if crate::completion::section_complete(v) {
                context.insert(field.to_string(), v.clone());
            }
        }
    }

    Value::Object(context)
}
