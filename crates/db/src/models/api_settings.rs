//! Global BB API settings model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use creatorhub_core::types::{DbId, Timestamp};

/// The single `api_settings` row.
///
/// Contains the plaintext secret -- NEVER serialize this to API responses.
/// Use [`ApiSettingsResponse`] (masked) for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct ApiSettings {
    pub id: i16,
    pub base_url: String,
    pub api_key: String,
    pub mock_mode: bool,
    pub updated_by: Option<DbId>,
    pub updated_at: Timestamp,
}

/// Masked settings representation safe for any caller, including
/// unauthenticated boot-time mode detection.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSettingsResponse {
    pub base_url: String,
    /// Masked sentinel (`****` + last 4 chars), never the plaintext key.
    pub api_key_masked: String,
    pub mock_mode: bool,
    pub updated_at: Timestamp,
}

impl ApiSettings {
    /// Mask the secret for client display: `****` plus at most the last
    /// four characters. An empty key masks to an empty string.
    pub fn masked_key(&self) -> String {
        if self.api_key.is_empty() {
            return String::new();
        }
        let tail: String = self
            .api_key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("****{tail}")
    }

    /// Build the masked response form.
    pub fn to_response(&self) -> ApiSettingsResponse {
        ApiSettingsResponse {
            base_url: self.base_url.clone(),
            api_key_masked: self.masked_key(),
            mock_mode: self.mock_mode,
            updated_at: self.updated_at,
        }
    }
}

/// DTO for the admin-only settings upsert.
#[derive(Debug, Deserialize)]
pub struct UpdateApiSettings {
    pub base_url: Option<String>,
    /// A new plaintext key. `None` keeps the stored key unchanged, so the
    /// client never needs to round-trip the secret.
    pub api_key: Option<String>,
    pub mock_mode: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn settings(key: &str) -> ApiSettings {
        ApiSettings {
            id: 1,
            base_url: "https://api.bb.example".to_string(),
            api_key: key.to_string(),
            mock_mode: false,
            updated_by: None,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_masked_key_shows_only_tail() {
        let masked = settings("sk_live_abcdef123456").masked_key();
        assert_eq!(masked, "****3456");
        assert!(!masked.contains("sk_live"), "prefix must not leak");
    }

    #[test]
    fn test_short_key_still_masks() {
        assert_eq!(settings("abc").masked_key(), "****abc");
    }

    #[test]
    fn test_empty_key_masks_to_empty() {
        assert_eq!(settings("").masked_key(), "");
    }

    #[test]
    fn test_response_never_contains_plaintext() {
        let s = settings("sk_live_abcdef123456");
        let json = serde_json::to_string(&s.to_response()).expect("serialize");
        assert!(!json.contains("sk_live_abcdef123456"));
    }
}
