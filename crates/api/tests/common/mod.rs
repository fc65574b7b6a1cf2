//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the production router (same middleware stack as `main.rs`) over
//! a `#[sqlx::test]`-provisioned database and drives it with
//! `tower::ServiceExt::oneshot`. Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use creatorhub_api::auth::jwt::{generate_access_token, JwtConfig};
use creatorhub_api::auth::password::hash_password;
use creatorhub_api::config::{AiConfig, ServerConfig};
use creatorhub_api::router::build_app_router;
use creatorhub_api::state::AppState;
use creatorhub_db::models::creator::UpsertCreator;
use creatorhub_db::models::user::{CreateUser, User};
use creatorhub_db::repositories::{CreatorRepo, RoleRepo, UserRepo};

/// Plaintext password used for every user the helpers create.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret
/// so tokens minted by [`token_for`] validate against the app under test.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        ai: AiConfig {
            // Port 1 refuses immediately; tests that exercise generation
            // point this at a local mock server instead.
            base_url: "http://127.0.0.1:1".to_string(),
            api_key: None,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This reuses the production `build_app_router` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that `main.rs` assembles.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create a user directly in the database and assign the given roles by
/// name (the roles must exist in the seeded catalogue).
pub async fn create_user_with_roles(pool: &PgPool, username: &str, roles: &[&str]) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.example"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");

    for role in roles {
        let row = RoleRepo::find_by_name(pool, role)
            .await
            .expect("role lookup should succeed")
            .unwrap_or_else(|| panic!("role '{role}' must be seeded"));
        RoleRepo::assign(pool, user.id, row.id)
            .await
            .expect("role assignment should succeed");
    }
    user
}

/// Mint a valid access token for a user. The roles claim is advisory; the
/// gates under test resolve the real role set from the database.
pub fn token_for(user: &User, roles: &[&str]) -> String {
    let role_names: Vec<String> = roles.iter().map(|r| r.to_string()).collect();
    generate_access_token(user.id, &role_names, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed a cached creator directory row and return it.
pub async fn seed_creator(
    pool: &PgPool,
    external_id: &str,
    name: &str,
) -> creatorhub_db::models::creator::Creator {
    let input = UpsertCreator {
        external_id: external_id.to_string(),
        display_name: name.to_string(),
        handle: format!("@{}", name.to_lowercase().replace(' ', "_")),
        profile_json: serde_json::json!({}),
    };
    CreatorRepo::upsert(pool, &input)
        .await
        .expect("creator seed should succeed")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Read the response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Assert a status code, printing the body on mismatch for faster triage.
pub async fn assert_status(response: Response, expected: StatusCode) -> serde_json::Value {
    let status = response.status();
    let json = body_json(response).await;
    assert_eq!(status, expected, "unexpected status; body: {json}");
    json
}
