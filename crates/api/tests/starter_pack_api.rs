//! HTTP-level integration tests for starter-pack send semantics.
//!
//! The platform is stood in for by a local wiremock server so the tests can
//! pin the one invariant reading the code can't prove under failure: the
//! `sent` status is persisted only after the gateway confirms the push.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, build_test_app, create_user_with_roles, post_auth, seed_creator, token_for,
};
use serde_json::json;
use sqlx::PgPool;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use creatorhub_db::models::starter_pack::UpsertStarterPack;
use creatorhub_db::repositories::{ApiSettingsRepo, StarterPackRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed a draft pack for the creator.
async fn seed_draft_pack(
    pool: &PgPool,
    creator_id: i64,
    generated_by: i64,
) -> creatorhub_db::models::starter_pack::StarterPack {
    StarterPackRepo::upsert(
        pool,
        &UpsertStarterPack {
            creator_id,
            sections_json: json!({ "captions": ["Hello"], "hooks": ["Hook one"] }),
            generated_by,
        },
    )
    .await
    .expect("pack seed should succeed")
}

/// Point the live connection at the given base URL.
async fn configure_live(pool: &PgPool, base_url: &str, updated_by: i64) {
    ApiSettingsRepo::upsert(pool, Some(base_url), Some("sk-test-key"), Some(false), updated_by)
        .await
        .expect("settings upsert should succeed");
}

// ---------------------------------------------------------------------------
// Test: gateway failure leaves the pack a draft (no partial `sent`)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_send_failure_leaves_pack_draft(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "sender", &["manager"]).await;
    let token = token_for(&staff, &["manager"]);
    let creator = seed_creator(&pool, "bb-200", "Hana").await;
    let pack = seed_draft_pack(&pool, creator.id, staff.id).await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/api/v2/starter-packs/{}", creator.external_id)))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    configure_live(&pool, &server.uri(), staff.id).await;

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/starter-packs/{}/send", pack.id),
        &token,
    )
    .await;

    // Expected failure: 200 envelope, success = false.
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("502"));

    // The status write never happened.
    let row = StarterPackRepo::find_by_id(&pool, pack.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "draft", "a failed push must not persist `sent`");
    assert!(row.sent_at.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_send_success_marks_pack_sent(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "sender2", &["manager"]).await;
    let token = token_for(&staff, &["manager"]);
    let creator = seed_creator(&pool, "bb-201", "Iris").await;
    let pack = seed_draft_pack(&pool, creator.id, staff.id).await;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/api/v2/starter-packs/{}", creator.external_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "received": true })))
        .mount(&server)
        .await;
    configure_live(&pool, &server.uri(), staff.id).await;

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/starter-packs/{}/send", pack.id),
        &token,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "sent");

    let row = StarterPackRepo::find_by_id(&pool, pack.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "sent");
    assert!(row.sent_at.is_some(), "a confirmed push stamps sent_at");
}

// ---------------------------------------------------------------------------
// Test: non-live modes and non-staff callers never reach the gateway
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_send_gated_off_in_mock_mode(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "mocksender", &["manager"]).await;
    let token = token_for(&staff, &["manager"]);
    let creator = seed_creator(&pool, "bb-202", "Joss").await;
    let pack = seed_draft_pack(&pool, creator.id, staff.id).await;

    ApiSettingsRepo::upsert(&pool, Some("https://bb.example"), Some("sk-x"), Some(true), staff.id)
        .await
        .unwrap();

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/starter-packs/{}/send", pack.id),
        &token,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["success"], false);

    let row = StarterPackRepo::find_by_id(&pool, pack.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "draft");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_send_requires_staff(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "packowner", &["manager"]).await;
    let outsider = create_user_with_roles(&pool, "outsider", &["creator"]).await;
    let token = token_for(&outsider, &["creator"]);
    let creator = seed_creator(&pool, "bb-203", "Kai").await;
    let pack = seed_draft_pack(&pool, creator.id, staff.id).await;

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/starter-packs/{}/send", pack.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let row = StarterPackRepo::find_by_id(&pool, pack.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.status, "draft");
}
