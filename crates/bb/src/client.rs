//! HTTP client for the BB platform REST API.
//!
//! Each operation maps to a fixed path suffix under the configured base
//! URL. Every call resolves to a [`SyncOutcome`]: non-2xx responses and
//! transport failures become `success = false` with a human-readable
//! message, so callers treat failures as recoverable (show retry) instead
//! of handling raw transport errors. The secret never appears in any
//! outcome, log line, or error message.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

/// Path suffixes for each gateway operation.
const PATH_CREATORS: &str = "/api/v2/creators";
const PATH_CONTENT: &str = "/api/v2/content";
const PATH_STARTER_PACKS: &str = "/api/v2/starter-packs";
const PATH_PING: &str = "/api/v2/ping";

/// Request timeout for all platform calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Normalized result of a gateway call: the `{success, data, error}`
/// envelope consumed by the proxy endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
}

impl SyncOutcome {
    /// A successful call with its (possibly null) response payload.
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed call with a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Client for one configured BB platform connection.
///
/// Holds the base URL and secret key; the key is attached as a bearer
/// header inside this crate only and is never echoed back.
pub struct BbClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl BbClient {
    /// Create a client for the given base URL and secret key.
    ///
    /// The trailing slash on the base URL, if any, is stripped so path
    /// suffixes concatenate predictably.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        }
    }

    /// List all creators known to the platform.
    pub async fn list_creators(&self) -> SyncOutcome {
        self.get(PATH_CREATORS.to_string()).await
    }

    /// Fetch a single creator's record (including the raw profile).
    pub async fn fetch_creator(&self, external_id: &str) -> SyncOutcome {
        self.get(format!("{PATH_CREATORS}/{external_id}")).await
    }

    /// Push one profile section edit back upstream.
    pub async fn push_profile_section(
        &self,
        external_id: &str,
        section: &str,
        value: &Value,
    ) -> SyncOutcome {
        self.post(
            format!("{PATH_CREATORS}/{external_id}/profile/{section}"),
            value,
        )
        .await
    }

    /// Push an approved content item to the platform.
    pub async fn push_content(&self, external_id: &str, payload: &Value) -> SyncOutcome {
        self.post(format!("{PATH_CONTENT}/{external_id}"), payload).await
    }

    /// Push a starter pack bundle to the platform.
    pub async fn push_starter_pack(&self, external_id: &str, payload: &Value) -> SyncOutcome {
        self.post(format!("{PATH_STARTER_PACKS}/{external_id}"), payload)
            .await
    }

    /// Liveness probe used by the settings "test connection" action.
    pub async fn test_connection(&self) -> SyncOutcome {
        self.get(PATH_PING.to_string()).await
    }

    async fn get(&self, path: String) -> SyncOutcome {
        let url = format!("{}{}", self.base_url, path);
        let result = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await;
        self.normalize(path, result).await
    }

    async fn post(&self, path: String, payload: &Value) -> SyncOutcome {
        let url = format!("{}{}", self.base_url, path);
        let result = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(payload)
            .send()
            .await;
        self.normalize(path, result).await
    }

    /// Collapse a reqwest result into the envelope form.
    async fn normalize(
        &self,
        path: String,
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> SyncOutcome {
        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let data = response.json::<Value>().await.unwrap_or(Value::Null);
                    tracing::debug!(%path, "BB platform call succeeded");
                    SyncOutcome::ok(data)
                } else {
                    tracing::warn!(%path, status = %status, "BB platform returned an error");
                    SyncOutcome::fail(format!(
                        "BB platform returned HTTP {} for {path}",
                        status.as_u16()
                    ))
                }
            }
            Err(err) => {
                // The key lives in a header, never in the reqwest error text.
                let reason = if err.is_timeout() {
                    "timed out"
                } else if err.is_connect() {
                    "connection failed"
                } else {
                    "request failed"
                };
                tracing::warn!(%path, error = %err, "BB platform unreachable");
                SyncOutcome::fail(format!("BB platform unreachable ({reason}) for {path}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_creators_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/creators"))
            .and(header("authorization", "Bearer sk-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "c1", "name": "Ava" }
            ])))
            .mount(&server)
            .await;

        let client = BbClient::new(&server.uri(), "sk-test-key");
        let outcome = client.list_creators().await;

        assert!(outcome.success);
        assert_eq!(outcome.data.unwrap()[0]["id"], "c1");
        assert!(outcome.error.is_none());
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_recoverable_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/starter-packs/c1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = BbClient::new(&server.uri(), "sk-test-key");
        let outcome = client.push_starter_pack("c1", &json!({ "hooks": [] })).await;

        assert!(!outcome.success);
        assert!(outcome.data.is_none());
        let error = outcome.error.expect("failure must carry a message");
        assert!(error.contains("502"), "message should name the status: {error}");
    }

    #[tokio::test]
    async fn test_secret_never_appears_in_outcome() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/ping"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let secret = "sk-extremely-secret-value";
        let client = BbClient::new(&server.uri(), secret);
        let outcome = client.test_connection().await;

        assert!(!outcome.success);
        let serialized = serde_json::to_string(&outcome).expect("serialize");
        assert!(
            !serialized.contains(secret),
            "the secret must never be echoed in any payload"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_failure_not_a_panic() {
        // Port 1 on loopback refuses immediately.
        let client = BbClient::new("http://127.0.0.1:1", "sk-test-key");
        let outcome = client.test_connection().await;

        assert!(!outcome.success);
        assert!(outcome.error.is_some());
    }

    #[tokio::test]
    async fn test_trailing_slash_on_base_url_is_tolerated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .mount(&server)
            .await;

        let client = BbClient::new(&format!("{}/", server.uri()), "sk-test-key");
        let outcome = client.test_connection().await;
        assert!(outcome.success);
    }

    #[tokio::test]
    async fn test_non_json_success_body_normalizes_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/creators/c9"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = BbClient::new(&server.uri(), "sk-test-key");
        let outcome = client.fetch_creator("c9").await;
        assert!(outcome.success);
        assert_eq!(outcome.data, Some(Value::Null));
    }
}
