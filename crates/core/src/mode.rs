//! Data-mode resolution.
//!
//! The console runs against either the live BB platform or a local fixture
//! set. The mode is derived from the persisted API settings row in exactly
//! one place -- here -- so screens never invent their own fallback rules.
//! Resolution order: settings-read error, then the explicit mock flag, then
//! missing/blank settings, then live. The flag outranks blank credentials:
//! a row saved with mock on is Mock even before a base URL is entered.

use serde::{Deserialize, Serialize};

pub const MODE_LIVE: &str = "live";
pub const MODE_MOCK: &str = "mock";
pub const MODE_UNCONFIGURED: &str = "unconfigured";
pub const MODE_ERROR: &str = "error";

/// The operating mode of the console with respect to external data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// Settings present and valid, mock flag off: act on the BB platform.
    Live,
    /// Explicit mock flag: act on local fixtures only.
    Mock,
    /// No settings row, or base URL / key blank.
    Unconfigured,
    /// The settings read itself failed.
    Error,
}

/// The subset of the API settings row that mode resolution needs.
#[derive(Debug, Clone, Default)]
pub struct ModeInputs {
    pub base_url: String,
    pub has_api_key: bool,
    pub mock_mode: bool,
}

impl DataMode {
    /// Resolve the mode from a settings read result.
    ///
    /// `settings` is `Err(())` when the read failed, `Ok(None)` when no row
    /// exists, and `Ok(Some(_))` when a row was loaded.
    pub fn resolve(settings: Result<Option<&ModeInputs>, ()>) -> Self {
        match settings {
            Err(()) => Self::Error,
            Ok(None) => Self::Unconfigured,
            Ok(Some(s)) => {
                if s.mock_mode {
                    Self::Mock
                } else if s.base_url.trim().is_empty() || !s.has_api_key {
                    Self::Unconfigured
                } else {
                    Self::Live
                }
            }
        }
    }

    /// Whether live external-sync actions are permitted.
    ///
    /// Unconfigured and Error gate exactly like Mock: generation and push
    /// actions must never run against synthetic or non-authoritative data.
    pub fn allows_live_sync(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// The wire string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Live => MODE_LIVE,
            Self::Mock => MODE_MOCK,
            Self::Unconfigured => MODE_UNCONFIGURED,
            Self::Error => MODE_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(base_url: &str, has_key: bool, mock: bool) -> ModeInputs {
        ModeInputs {
            base_url: base_url.to_string(),
            has_api_key: has_key,
            mock_mode: mock,
        }
    }

    #[test]
    fn test_read_failure_resolves_to_error() {
        assert_eq!(DataMode::resolve(Err(())), DataMode::Error);
    }

    #[test]
    fn test_missing_row_resolves_to_unconfigured() {
        assert_eq!(DataMode::resolve(Ok(None)), DataMode::Unconfigured);
    }

    #[test]
    fn test_blank_fields_resolve_to_unconfigured() {
        let s = inputs("", true, false);
        assert_eq!(DataMode::resolve(Ok(Some(&s))), DataMode::Unconfigured);

        let s = inputs("https://api.bb.example", false, false);
        assert_eq!(DataMode::resolve(Ok(Some(&s))), DataMode::Unconfigured);
    }

    #[test]
    fn test_explicit_mock_flag_wins_over_valid_settings() {
        let s = inputs("https://api.bb.example", true, true);
        assert_eq!(DataMode::resolve(Ok(Some(&s))), DataMode::Mock);
    }

    #[test]
    fn test_explicit_mock_flag_wins_over_blank_settings() {
        // Mock is a deliberate choice; it must not be demoted to
        // Unconfigured just because no credentials were entered yet.
        let s = inputs("", false, true);
        assert_eq!(DataMode::resolve(Ok(Some(&s))), DataMode::Mock);
    }

    #[test]
    fn test_valid_settings_resolve_to_live() {
        let s = inputs("https://api.bb.example", true, false);
        assert_eq!(DataMode::resolve(Ok(Some(&s))), DataMode::Live);
    }

    #[test]
    fn test_only_live_allows_sync() {
        assert!(DataMode::Live.allows_live_sync());
        assert!(!DataMode::Mock.allows_live_sync());
        assert!(!DataMode::Unconfigured.allows_live_sync());
        assert!(!DataMode::Error.allows_live_sync());
    }
}
