//! Client for the external AI text-generation backend.
//!
//! One-shot generation: the creator's normalized profile is condensed into
//! a prompt context (see `creatorhub_core::starter_pack`) and sent in a
//! single request; the backend returns the generated content sections as a
//! JSON object. No streaming, no retries -- a failed call surfaces to the
//! client as a retryable error.

use std::time::Duration;

use serde_json::{json, Value};

use creatorhub_core::error::CoreError;

use crate::config::AiConfig;

/// Generation endpoint under the AI backend base URL.
const GENERATE_PATH: &str = "/v1/generate";

/// Request timeout. Generation is slow; allow more than API default.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// The content sections requested from the model.
const REQUESTED_SECTIONS: &[&str] = &["captions", "scripts", "hooks", "bio_variants"];

/// Client for the AI generation backend.
pub struct AiClient {
    base_url: String,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl AiClient {
    /// Build a client from server configuration.
    pub fn new(config: &AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            http,
        }
    }

    /// Generate starter-pack sections from a prompt context.
    ///
    /// Returns the backend's `sections` object. All failure shapes collapse
    /// into [`CoreError::ExternalService`] with a human-readable message.
    pub async fn generate_starter_pack(&self, context: &Value) -> Result<Value, CoreError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);
        let body = json!({
            "context": context,
            "sections": REQUESTED_SECTIONS,
        });

        let mut request = self.http.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|err| {
            tracing::warn!(error = %err, "AI backend unreachable");
            CoreError::ExternalService("AI backend unreachable".to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::ExternalService(format!(
                "AI backend returned HTTP {}",
                status.as_u16()
            )));
        }

        let payload: Value = response.json().await.map_err(|_| {
            CoreError::ExternalService("AI backend returned a malformed response".to_string())
        })?;

        // Accept either { "sections": {...} } or a bare object.
        let sections = payload.get("sections").cloned().unwrap_or(payload);
        if !sections.is_object() {
            return Err(CoreError::ExternalService(
                "AI backend response did not contain content sections".to_string(),
            ));
        }
        Ok(sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(uri: &str) -> AiClient {
        AiClient::new(&AiConfig {
            base_url: uri.to_string(),
            api_key: None,
        })
    }

    #[tokio::test]
    async fn test_generate_unwraps_sections_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "sections": { "captions": ["hey!"], "hooks": ["..."] }
            })))
            .mount(&server)
            .await;

        let sections = client_for(&server.uri())
            .generate_starter_pack(&json!({ "niche": "fitness" }))
            .await
            .expect("generation should succeed");
        assert_eq!(sections["captions"][0], "hey!");
    }

    #[tokio::test]
    async fn test_backend_error_is_external_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .generate_starter_pack(&json!({}))
            .await;
        assert_matches!(result, Err(CoreError::ExternalService(_)));
    }

    #[tokio::test]
    async fn test_non_object_response_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
            .mount(&server)
            .await;

        let result = client_for(&server.uri())
            .generate_starter_pack(&json!({}))
            .await;
        assert_matches!(result, Err(CoreError::ExternalService(_)));
    }
}
