//! Creator directory and profile handlers.
//!
//! Directory reads are proxy endpoints: the data mode is resolved per
//! request and embedded in the payload, live fetches refresh the local
//! cache, and a platform failure degrades to the cached snapshot (never a
//! 5xx) so staff keep a working directory during an outage.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use creatorhub_core::completion::{can_generate, completion, REQUIRED_SECTIONS};
use creatorhub_core::error::CoreError;
use creatorhub_core::mode::DataMode;
use creatorhub_core::profile::{normalize_profile, SCALAR_FIELDS};
use creatorhub_db::models::creator::UpsertCreator;
use creatorhub_db::repositories::CreatorRepo;

use creatorhub_bb::fixtures::{fixture_creator, fixture_directory};

use crate::error::{AppError, AppResult};
use crate::gateway::GatewayContext;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::StaffUser;
use crate::response::{DataResponse, SyncResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    /// Case-insensitive substring filter on name or handle.
    pub search: Option<String>,
}

/// `GET /api/creators`
///
/// Live mode: list from the platform, refresh the cache, serve the cached
/// rows. On a platform failure the cached rows are still returned with
/// `success: false`. Non-live modes serve the fixture directory.
pub async fn list_creators(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(query): Query<DirectoryQuery>,
) -> AppResult<Json<SyncResponse>> {
    let ctx = GatewayContext::resolve(&state.pool).await;
    let search = query.search.as_deref().filter(|s| !s.trim().is_empty());

    let Some(client) = &ctx.client else {
        let creators = filtered_fixture_directory(search);
        return Ok(Json(SyncResponse::ok(json!({
            "mode": ctx.mode.as_str(),
            "creators": creators,
        }))));
    };

    let outcome = client.list_creators().await;
    if outcome.success {
        if let Some(entries) = outcome.data.as_ref().and_then(Value::as_array) {
            for entry in entries {
                if let Err(err) = cache_directory_entry(&state, entry).await {
                    tracing::warn!(error = %err, "Directory cache refresh failed for one entry");
                }
            }
        }
    }

    let cached = CreatorRepo::list(&state.pool, search).await?;
    let data = json!({
        "mode": ctx.mode.as_str(),
        "creators": cached,
    });

    Ok(Json(SyncResponse {
        success: outcome.success,
        data: Some(data),
        error: outcome.error,
    }))
}

/// `GET /api/creators/{external_id}`
///
/// Returns the creator record with a normalized profile snapshot. Live mode
/// fetches fresh and refreshes the cache; on failure the cached row is
/// served with `success: false`.
pub async fn get_creator(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(external_id): Path<String>,
) -> AppResult<Json<SyncResponse>> {
    let ctx = GatewayContext::resolve(&state.pool).await;
    let (profile, record, error) = load_creator_record(&state, &ctx, &external_id).await?;

    let data = json!({
        "mode": ctx.mode.as_str(),
        "creator": record,
        "profile": profile,
    });
    Ok(Json(SyncResponse {
        success: error.is_none(),
        data: Some(data),
        error,
    }))
}

/// `GET /api/creators/{external_id}/completion`
///
/// Onboarding completion report plus the generation-readiness flag. The
/// flag is computed server-side from the same report and mode the client
/// sees, so the UI never re-derives the gate.
pub async fn get_completion(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(external_id): Path<String>,
) -> AppResult<Json<DataResponse<Value>>> {
    let ctx = GatewayContext::resolve(&state.pool).await;
    let (profile, _, _) = load_creator_record(&state, &ctx, &external_id).await?;

    let report = completion(&profile, REQUIRED_SECTIONS);
    let generation_ready = can_generate(&report, ctx.mode);

    let data = json!({
        "mode": ctx.mode.as_str(),
        "report": report,
        "generation_ready": generation_ready,
    });
    Ok(Json(DataResponse { data }))
}

/// `PUT /api/creators/{external_id}/profile/{section}`
///
/// Relays one profile section edit upstream, then mirrors it into the
/// cached snapshot. The platform owns profile data, so outside live mode
/// this is an expected failure, not a write to the fixtures.
pub async fn put_profile_section(
    State(state): State<AppState>,
    staff: StaffUser,
    Path((external_id, section)): Path<(String, String)>,
    Json(value): Json<Value>,
) -> AppResult<Json<SyncResponse>> {
    validate_section_name(&section)?;

    let ctx = GatewayContext::resolve(&state.pool).await;
    let Some(client) = &ctx.client else {
        return Ok(Json(SyncResponse::fail(sync_unavailable(ctx.mode))));
    };

    let outcome = client
        .push_profile_section(&external_id, &section, &value)
        .await;

    if outcome.success {
        if let Some(creator) = CreatorRepo::find_by_external_id(&state.pool, &external_id).await? {
            CreatorRepo::set_profile_section(&state.pool, creator.id, &section, &value).await?;
        }
        tracing::info!(
            user_id = staff.user_id,
            external_id = %external_id,
            section = %section,
            "Profile section pushed upstream"
        );
    }

    Ok(Json(outcome.into()))
}

/// Human-readable reason live sync is unavailable in the current mode.
pub(crate) fn sync_unavailable(mode: DataMode) -> String {
    match mode {
        DataMode::Mock => "Mock mode is enabled; live sync is disabled".to_string(),
        DataMode::Unconfigured => {
            "BB platform connection is not configured".to_string()
        }
        DataMode::Error => "BB platform settings could not be read".to_string(),
        DataMode::Live => "Live sync unavailable".to_string(),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Serialization failed: {e}")))
}

/// Resolve a creator's normalized profile and directory record.
///
/// Live mode fetches fresh (refreshing the cache); a failed fetch or a
/// non-live mode falls back to the cache, then to fixtures. The returned
/// error, if any, is the expected-failure message for the envelope.
pub(crate) async fn load_creator_record(
    state: &AppState,
    ctx: &GatewayContext,
    external_id: &str,
) -> AppResult<(Value, Value, Option<String>)> {
    if let Some(client) = &ctx.client {
        let outcome = client.fetch_creator(external_id).await;
        if outcome.success {
            let record = outcome.data.unwrap_or(Value::Null);
            let profile = normalize_profile(record.get("profile").unwrap_or(&Value::Null));
            let cached = cache_creator_record(state, external_id, &record, &profile).await?;
            return Ok((profile, to_json(&cached)?, None));
        }

        // Degrade to the cached snapshot if one exists.
        if let Some(cached) = CreatorRepo::find_by_external_id(&state.pool, external_id).await? {
            let profile = cached.profile_json.clone();
            return Ok((profile, to_json(&cached)?, outcome.error));
        }
        return Err(AppError::Core(CoreError::ExternalService(
            outcome
                .error
                .unwrap_or_else(|| "BB platform request failed".to_string()),
        )));
    }

    // Non-live: fixtures first, then any previously cached live data.
    if let Some(record) = fixture_creator(external_id) {
        let profile = normalize_profile(record.get("profile").unwrap_or(&Value::Null));
        return Ok((profile, record, None));
    }
    if let Some(cached) = CreatorRepo::find_by_external_id(&state.pool, external_id).await? {
        let profile = cached.profile_json.clone();
        return Ok((profile, to_json(&cached)?, None));
    }

    Err(AppError::Core(CoreError::NotFound {
        entity: "Creator",
        id: external_id.to_string(),
    }))
}

/// Upsert a directory-listing entry into the cache, preserving any
/// previously synced profile snapshot.
async fn cache_directory_entry(state: &AppState, entry: &Value) -> AppResult<()> {
    let Some(external_id) = entry.get("id").and_then(Value::as_str) else {
        return Ok(()); // malformed entry, skip
    };
    let display_name = entry.get("name").and_then(Value::as_str).unwrap_or("");
    let handle = entry.get("handle").and_then(Value::as_str).unwrap_or("");

    let profile_json = CreatorRepo::find_by_external_id(&state.pool, external_id)
        .await?
        .map(|c| c.profile_json)
        .unwrap_or_else(|| json!({}));

    CreatorRepo::upsert(
        &state.pool,
        &UpsertCreator {
            external_id: external_id.to_string(),
            display_name: display_name.to_string(),
            handle: handle.to_string(),
            profile_json,
        },
    )
    .await?;
    Ok(())
}

/// Upsert a full creator record (with normalized profile) into the cache.
async fn cache_creator_record(
    state: &AppState,
    external_id: &str,
    record: &Value,
    profile: &Value,
) -> AppResult<creatorhub_db::models::creator::Creator> {
    let display_name = record.get("name").and_then(Value::as_str).unwrap_or("");
    let handle = record.get("handle").and_then(Value::as_str).unwrap_or("");

    let cached = CreatorRepo::upsert(
        &state.pool,
        &UpsertCreator {
            external_id: external_id.to_string(),
            display_name: display_name.to_string(),
            handle: handle.to_string(),
            profile_json: profile.clone(),
        },
    )
    .await?;
    Ok(cached)
}

/// A section name must be a canonical profile key.
fn validate_section_name(section: &str) -> AppResult<()> {
    let known = REQUIRED_SECTIONS.contains(&section)
        || SCALAR_FIELDS.contains(&section)
        || section == "audience_profile";
    if !known {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown profile section '{section}'"
        ))));
    }
    Ok(())
}

fn filtered_fixture_directory(search: Option<&str>) -> Value {
    let directory = fixture_directory();
    let Some(term) = search else {
        return directory;
    };
    let needle = term.trim().to_lowercase();
    let filtered: Vec<Value> = directory
        .as_array()
        .into_iter()
        .flatten()
        .filter(|entry| {
            ["name", "handle"].iter().any(|field| {
                entry
                    .get(field)
                    .and_then(Value::as_str)
                    .is_some_and(|v| v.to_lowercase().contains(&needle))
            })
        })
        .cloned()
        .collect();
    Value::Array(filtered)
}
