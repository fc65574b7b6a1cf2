//! Onboarding completion calculation.
//!
//! A creator's profile is a sparse aggregate of named sections; this module
//! computes which required sections are present and a completion percentage,
//! and hosts the generation-readiness gate built on top of it. Evaluation is
//! pure: the caller passes in a profile snapshot (canonical JSON, see
//! [`crate::profile`]) and gets the same report every time.

use serde::Serialize;
use serde_json::Value;

use crate::mode::DataMode;

/// The canonical required-section list gating starter-pack generation.
///
/// The upstream tool disagreed with itself on the required set (9 sections
/// on one screen, 15 on another); this list is the canonical choice. The
/// scalar profile fields (niche, tone_of_voice, posting_frequency,
/// content_style) and audience_profile are displayed but do not gate.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "personal_information",
    "physical_description",
    "boundaries",
    "pricing_structure",
    "persona_character",
    "scripts_messaging",
    "content_preferences",
    "visual_identity",
    "creator_story",
];

/// Completion report for one profile snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionReport {
    /// Integer percentage in `0..=100`, round-half-up.
    pub percent: u8,
    /// Required sections that are present and non-empty.
    pub completed: Vec<String>,
    /// Required sections that are absent or empty.
    pub missing: Vec<String>,
}

/// Whether a section value counts as complete.
///
/// Complete means present and non-empty: an object with at least one key, an
/// array with at least one element, a non-empty string, or a truthy scalar.
/// `{}`, `[]`, `""`, `null`, `false`, and `0` all count as missing.
pub fn section_complete(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Compute the completion report for `profile` against `required`.
///
/// `profile` is the canonical profile object; sections are looked up as
/// top-level keys. An empty `required` set yields 0 percent by convention
/// (never divides by zero). Order independent: the report lists sections in
/// the order of `required`.
pub fn completion(profile: &Value, required: &[&str]) -> CompletionReport {
    let mut completed = Vec::new();
    let mut missing = Vec::new();

    for &section in required {
        let present = profile
            .get(section)
            .is_some_and(section_complete);
        if present {
            completed.push(section.to_string());
        } else {
            missing.push(section.to_string());
        }
    }

    let percent = if required.is_empty() {
        0
    } else {
        // Round half up: floor(x + 0.5) on the exact ratio.
        let ratio = 100.0 * completed.len() as f64 / required.len() as f64;
        (ratio + 0.5).floor() as u8
    };

    CompletionReport {
        percent,
        completed,
        missing,
    }
}

/// The one true business rule: a creator is generation-ready iff the
/// required sections are 100% complete AND the console is in live mode.
///
/// Mock, Unconfigured, and Error modes all refuse: generation must never
/// run against synthetic, incomplete, or non-authoritative data.
pub fn can_generate(report: &CompletionReport, mode: DataMode) -> bool {
    report.percent == 100 && mode.allows_live_sync()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// A profile with every required section populated.
    fn full_profile() -> Value {
        let mut obj = serde_json::Map::new();
        for section in REQUIRED_SECTIONS {
            obj.insert(section.to_string(), json!({ "filled": true }));
        }
        Value::Object(obj)
    }

    #[test]
    fn test_empty_object_and_array_count_as_missing() {
        // The frequently-violated invariant: {} and [] are NOT complete.
        assert!(!section_complete(&json!({})));
        assert!(!section_complete(&json!([])));
        assert!(section_complete(&json!({ "a": 1 })));
        assert!(section_complete(&json!([1])));
    }

    #[test]
    fn test_scalar_presence_rule() {
        assert!(!section_complete(&Value::Null));
        assert!(!section_complete(&json!("")));
        assert!(!section_complete(&json!("   ")));
        assert!(!section_complete(&json!(false)));
        assert!(!section_complete(&json!(0)));
        assert!(section_complete(&json!("glam")));
        assert!(section_complete(&json!(true)));
        assert!(section_complete(&json!(3)));
    }

    #[test]
    fn test_full_profile_is_100_percent() {
        let report = completion(&full_profile(), REQUIRED_SECTIONS);
        assert_eq!(report.percent, 100);
        assert_eq!(report.completed.len(), REQUIRED_SECTIONS.len());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_empty_profile_is_0_percent() {
        let report = completion(&json!({}), REQUIRED_SECTIONS);
        assert_eq!(report.percent, 0);
        assert!(report.completed.is_empty());
        assert_eq!(report.missing.len(), REQUIRED_SECTIONS.len());
    }

    #[test]
    fn test_rounding_is_half_up() {
        // 1 of 9 = 11.11 -> 11; 4 of 9 = 44.44 -> 44; 5 of 9 = 55.55 -> 56.
        let cases: &[(usize, u8)] = &[(1, 11), (4, 44), (5, 56), (8, 89)];
        for (count, expected) in cases {
            let mut obj = serde_json::Map::new();
            for section in REQUIRED_SECTIONS.iter().take(*count) {
                obj.insert(section.to_string(), json!(["x"]));
            }
            let report = completion(&Value::Object(obj), REQUIRED_SECTIONS);
            assert_eq!(
                report.percent, *expected,
                "{count} of 9 sections should round to {expected}"
            );
        }
    }

    #[test]
    fn test_percent_is_always_in_range() {
        for count in 0..=REQUIRED_SECTIONS.len() {
            let mut obj = serde_json::Map::new();
            for section in REQUIRED_SECTIONS.iter().take(count) {
                obj.insert(section.to_string(), json!({ "k": "v" }));
            }
            let report = completion(&Value::Object(obj), REQUIRED_SECTIONS);
            assert!(report.percent <= 100);
        }
    }

    #[test]
    fn test_empty_required_set_is_zero_not_panic() {
        let report = completion(&full_profile(), &[]);
        assert_eq!(report.percent, 0);
        assert!(report.completed.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_completion_is_idempotent() {
        let profile = json!({
            "personal_information": { "name": "A" },
            "boundaries": [],
            "creator_story": "a story",
        });
        let first = completion(&profile, REQUIRED_SECTIONS);
        let second = completion(&profile, REQUIRED_SECTIONS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_can_generate_requires_both_conjuncts() {
        let full = completion(&full_profile(), REQUIRED_SECTIONS);
        assert_eq!(full.percent, 100);

        // 100% but mock mode: refused.
        assert!(!can_generate(&full, DataMode::Mock));
        assert!(!can_generate(&full, DataMode::Unconfigured));
        assert!(!can_generate(&full, DataMode::Error));

        // Live mode but below 100%: refused.
        let mut obj = serde_json::Map::new();
        for section in REQUIRED_SECTIONS.iter().take(REQUIRED_SECTIONS.len() - 1) {
            obj.insert(section.to_string(), json!({ "k": 1 }));
        }
        let partial = completion(&Value::Object(obj), REQUIRED_SECTIONS);
        assert!(partial.percent < 100);
        assert!(!can_generate(&partial, DataMode::Live));

        // Both hold: allowed.
        assert!(can_generate(&full, DataMode::Live));
    }
}
