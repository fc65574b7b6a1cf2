//! Creator profile normalization.
//!
//! The BB platform returns duck-typed profile payloads with legacy field
//! aliases for several sections. Normalization happens once, at the gateway
//! boundary; everything downstream (completion, prompt building, display)
//! works against the canonical key set and never branches on alias
//! presence.

use serde_json::{Map, Value};

/// Legacy alias -> canonical section name.
///
/// When both the alias and the canonical key are present, the canonical key
/// wins and the alias is dropped.
const SECTION_ALIASES: &[(&str, &str)] = &[
    ("personal_info", "personal_information"),
    ("physical", "physical_description"),
    ("pricing", "pricing_structure"),
    ("persona", "persona_character"),
    ("scripts", "scripts_messaging"),
    ("preferences", "content_preferences"),
    ("visuals", "visual_identity"),
    ("story", "creator_story"),
    ("audience", "audience_profile"),
    ("tone", "tone_of_voice"),
];

/// Scalar profile fields carried through as-is.
pub const SCALAR_FIELDS: &[&str] = &[
    "niche",
    "tone_of_voice",
    "posting_frequency",
    "content_style",
];

/// Normalize an external profile payload into the canonical shape.
///
/// Renames known aliases, drops nothing else: unknown keys pass through so
/// new upstream fields remain visible to staff. Non-object payloads
/// normalize to an empty object (a missing profile is simply 0% complete).
pub fn normalize_profile(raw: &Value) -> Value {
    let Some(obj) = raw.as_object() else {
        return Value::Object(Map::new());
    };

    let mut canonical = Map::new();
    for (key, value) in obj {
        let name = SECTION_ALIASES
            .iter()
            .find(|(alias, _)| alias == key)
            .map(|(_, target)| *target)
            .unwrap_or(key.as_str());

        // Canonical key wins over its alias when both are present,
        // regardless of payload key order.
        if name != key && obj.contains_key(name) {
            continue;
        }
        canonical.insert(name.to_string(), value.clone());
    }

    Value::Object(canonical)
}
