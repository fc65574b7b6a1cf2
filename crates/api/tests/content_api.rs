//! HTTP-level integration tests for the content library endpoints.
//!
//! Rows are seeded through the repository layer; behaviour is verified
//! through the HTTP API so the role gates and error mapping are exercised
//! exactly as production traffic would hit them.

mod common;

use axum::http::StatusCode;
use common::{
    assert_status, body_json, build_test_app, create_user_with_roles, delete_auth, get_auth,
    patch_json_auth, post_auth, post_json, post_json_auth, seed_creator, token_for,
};
use serde_json::json;
use sqlx::PgPool;

use creatorhub_db::models::content_item::CreateContentItem;
use creatorhub_db::repositories::ContentItemRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_item(creator_id: i64, title: &str) -> CreateContentItem {
    CreateContentItem {
        creator_id,
        category: "captions".to_string(),
        title: title.to_string(),
        description: None,
        body: "Sample body text".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: any authenticated user can create and edit content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_staff_user_can_create_content(pool: PgPool) {
    let user = create_user_with_roles(&pool, "writer", &["creator"]).await;
    let token = token_for(&user, &["creator"]);
    let creator = seed_creator(&pool, "bb-100", "Ava").await;

    let body = json!({
        "creator_id": creator.id,
        "category": "captions",
        "title": "Monday post",
        "body": "Caption text",
    });
    let response = post_json_auth(build_test_app(pool), "/api/content", &token, body).await;
    let json = assert_status(response, StatusCode::CREATED).await;

    assert_eq!(json["data"]["title"], "Monday post");
    assert_eq!(json["data"]["approval_status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_staff_user_can_update_content(pool: PgPool) {
    let user = create_user_with_roles(&pool, "editor", &["creator"]).await;
    let token = token_for(&user, &["creator"]);
    let creator = seed_creator(&pool, "bb-101", "Bea").await;
    let item = ContentItemRepo::create(&pool, &new_item(creator.id, "Draft title"))
        .await
        .unwrap();

    let response = patch_json_auth(
        build_test_app(pool),
        &format!("/api/content/{}", item.id),
        &token,
        json!({ "title": "Edited title" }),
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["title"], "Edited title");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_content_requires_auth(pool: PgPool) {
    let creator = seed_creator(&pool, "bb-102", "Cal").await;

    let body = json!({
        "creator_id": creator.id,
        "category": "captions",
        "title": "No token",
        "body": "x",
    });
    let response = post_json(build_test_app(pool), "/api/content", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_blank_title_rejected_before_insert(pool: PgPool) {
    let user = create_user_with_roles(&pool, "blankt", &["creator"]).await;
    let token = token_for(&user, &["creator"]);
    let creator = seed_creator(&pool, "bb-103", "Dee").await;

    let body = json!({
        "creator_id": creator.id,
        "category": "captions",
        "title": "   ",
        "body": "x",
    });
    let app = build_test_app(pool.clone());
    let response = post_json_auth(app, "/api/content", &token, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let items = ContentItemRepo::list_for_creator(&pool, creator.id, None)
        .await
        .unwrap();
    assert!(items.is_empty(), "rejected create must not persist a row");
}

// ---------------------------------------------------------------------------
// Test: approve, delete, and push are staff-only (server-side 403)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_staff_cannot_approve_delete_or_push(pool: PgPool) {
    let user = create_user_with_roles(&pool, "nostaff", &["creator"]).await;
    let token = token_for(&user, &["creator"]);
    let creator = seed_creator(&pool, "bb-104", "Eli").await;
    let item = ContentItemRepo::create(&pool, &new_item(creator.id, "Gated item"))
        .await
        .unwrap();

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}/approve", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}/sync", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The item is untouched by the rejected actions.
    let row = ContentItemRepo::find_by_id(&pool, item.id).await.unwrap();
    assert_eq!(row.unwrap().approval_status, "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_staff_can_approve_and_double_approve_conflicts(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "approver", &["manager"]).await;
    let token = token_for(&staff, &["manager"]);
    let creator = seed_creator(&pool, "bb-105", "Fay").await;
    let item = ContentItemRepo::create(&pool, &new_item(creator.id, "Approve me"))
        .await
        .unwrap();

    let response = post_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}/approve", item.id),
        &token,
    )
    .await;
    let json = assert_status(response, StatusCode::OK).await;
    assert_eq!(json["data"]["approval_status"], "approved");
    assert_eq!(json["data"]["approved_by"], staff.id);

    // The transition is one-way; a second approve is a conflict.
    let response = post_auth(
        build_test_app(pool),
        &format!("/api/content/{}/approve", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Test: deleted content is unretrievable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleted_content_is_unretrievable(pool: PgPool) {
    let staff = create_user_with_roles(&pool, "remover", &["manager"]).await;
    let token = token_for(&staff, &["manager"]);
    let creator = seed_creator(&pool, "bb-106", "Gus").await;
    let item = ContentItemRepo::create(&pool, &new_item(creator.id, "Doomed item"))
        .await
        .unwrap();

    let response = delete_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone from the listing.
    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/creators/{}/content", creator.id),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert!(
        json["data"].as_array().unwrap().is_empty(),
        "deleted item must not appear in the library listing"
    );

    // Every item-scoped operation now answers 404.
    let response = patch_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/content/{}", item.id),
        &token,
        json!({ "title": "Too late" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = post_auth(
        build_test_app(pool),
        &format!("/api/content/{}/approve", item.id),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
