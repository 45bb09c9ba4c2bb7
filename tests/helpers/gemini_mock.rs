//! Mock Gemini API server for testing

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};
use EngChatBot::config::GeminiConfig;

pub const TEST_MODEL: &str = "gemini-test";
pub const TEST_API_KEY: &str = "test-gemini-key";

/// Mock Gemini API server for testing
pub struct GeminiMockServer {
    pub server: MockServer,
}

impl GeminiMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    /// Client configuration pointed at this server
    pub fn config(&self, max_retries: u32) -> GeminiConfig {
        GeminiConfig {
            api_key: TEST_API_KEY.to_string(),
            model: TEST_MODEL.to_string(),
            base_url: self.server.uri(),
            timeout_seconds: 5,
            max_retries,
        }
    }

    fn generate_content() -> wiremock::MockBuilder {
        Mock::given(method("POST"))
            .and(path(format!("/models/{}:generateContent", TEST_MODEL)))
            .and(header("x-goog-api-key", TEST_API_KEY))
    }

    /// Respond with a single candidate containing `text`
    pub async fn mock_reply(&self, text: &str) {
        Self::generate_content()
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_json(text)))
            .mount(&self.server)
            .await;
    }

    /// Respond with a raw JSON body
    pub async fn mock_json(&self, body: Value) {
        Self::generate_content()
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond with an error status, at most `times` times when given
    pub async fn mock_status(&self, status: u16, message: &str, times: Option<u64>) {
        let body = json!({ "error": { "code": status, "message": message, "status": "ERROR" } });
        let mut mock = Self::generate_content()
            .respond_with(ResponseTemplate::new(status).set_body_json(body));
        if let Some(times) = times {
            mock = mock.up_to_n_times(times).with_priority(1);
        }
        mock.mount(&self.server).await;
    }

    /// Respond with `text` after `delay`
    pub async fn mock_slow_reply(&self, text: &str, delay: std::time::Duration) {
        Self::generate_content()
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_json(text))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all requests received
    pub async fn request_bodies(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|req| serde_json::from_slice(&req.body).expect("request body is JSON"))
            .collect()
    }
}

pub fn candidate_json(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}
