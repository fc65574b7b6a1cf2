//! Fixture creators served in mock/unconfigured mode.
//!
//! When the console has no usable platform connection, the directory falls
//! back to this synthetic set so staff can still exercise the screens. The
//! generation gate refuses fixtures regardless of their completion score.

use serde_json::{json, Value};

/// A fixture directory entry shaped like a normalized platform response.
#[derive(Debug, Clone)]
pub struct FixtureCreator {
    pub external_id: &'static str,
    pub display_name: &'static str,
    pub handle: &'static str,
}

/// The fixture directory.
pub const FIXTURE_CREATORS: &[FixtureCreator] = &[
    FixtureCreator {
        external_id: "mock-001",
        display_name: "Ava Sterling",
        handle: "avasterling",
    },
    FixtureCreator {
        external_id: "mock-002",
        display_name: "Luna Reyes",
        handle: "lunareyes",
    },
    FixtureCreator {
        external_id: "mock-003",
        display_name: "Noor Haddad",
        handle: "noorhaddad",
    },
];

/// Directory listing in the same shape a live `list_creators` call yields.
pub fn fixture_directory() -> Value {
    Value::Array(
        FIXTURE_CREATORS
            .iter()
            .map(|c| {
                json!({
                    "id": c.external_id,
                    "name": c.display_name,
                    "handle": c.handle,
                })
            })
            .collect(),
    )
}

/// A fixture creator record with profile, or `None` for unknown ids.
///
/// `mock-001` carries a fully populated required-section set (useful for
/// demonstrating that even 100% completion cannot generate outside live
/// mode); the others are deliberately partial.
pub fn fixture_creator(external_id: &str) -> Option<Value> {
    let profile = match external_id {
        "mock-001" => json!({
            "personal_information": { "name": "Ava Sterling", "age": 27 },
            "physical_description": { "hair": "auburn", "eyes": "green" },
            "boundaries": ["no calls", "no meetups"],
            "pricing_structure": { "subscription": 9.99, "ppv_min": 5 },
            "persona_character": { "archetype": "girl next door" },
            "scripts_messaging": { "greeting": "hey you!" },
            "content_preferences": ["photos", "short video"],
            "visual_identity": { "palette": ["#e8b4bc", "#2d2d34"] },
            "creator_story": "Started in 2023, grew through fitness content.",
            "niche": "fitness",
            "tone_of_voice": "playful",
        }),
        "mock-002" => json!({
            "personal_information": { "name": "Luna Reyes" },
            "boundaries": [],
            "pricing_structure": {},
            "creator_story": "",
        }),
        "mock-003" => json!({
            "personal_information": { "name": "Noor Haddad" },
            "persona_character": { "archetype": "mystic" },
        }),
        _ => return None,
    };

    let entry = FIXTURE_CREATORS.iter().find(|c| c.external_id == external_id)?;
    Some(json!({
        "id": entry.external_id,
        "name": entry.display_name,
        "handle": entry.handle,
        "profile": profile,
    }))
}
