//! Mock Telegram API Server for testing
//!
//! Simulates the Telegram Bot API with wiremock. Requests are recorded so
//! tests can inspect the exact JSON payloads the bot sent.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Create a bot pointed at this server
    pub fn bot(&self) -> Bot {
        let url = self.server.uri().parse().expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(url)
    }

    async fn mount(&self, endpoint: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path_regex(format!("(?i)/{}$", endpoint)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mocks for every endpoint the bot uses
    pub async fn setup_default_mocks(&self) {
        self.mount("sendMessage", 200, json!({ "ok": true, "result": bot_message_json("Test message") })).await;
        self.mount("editMessageText", 200, json!({ "ok": true, "result": bot_message_json("Edited test message") })).await;
        self.mount("sendChatAction", 200, json!({ "ok": true, "result": true })).await;
        self.mount("answerCallbackQuery", 200, json!({ "ok": true, "result": true })).await;
        self.mount("setMyCommands", 200, json!({ "ok": true, "result": true })).await;
    }

    /// Setup mocks where sending messages fails
    pub async fn setup_error_mocks(&self) {
        let error = json!({
            "ok": false,
            "error_code": 403,
            "description": "Forbidden: bot was blocked by the user"
        });
        self.mount("sendMessage", 403, error.clone()).await;
        self.mount("editMessageText", 403, error).await;
        self.mount("sendChatAction", 200, json!({ "ok": true, "result": true })).await;
        self.mount("answerCallbackQuery", 200, json!({ "ok": true, "result": true })).await;
    }

    /// JSON bodies of all requests made to an endpoint, in order
    pub async fn requests_to(&self, endpoint: &str) -> Vec<Value> {
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        received_requests
            .iter()
            .filter(|req| {
                req.url
                    .path()
                    .to_ascii_lowercase()
                    .ends_with(&format!("/{}", endpoint.to_ascii_lowercase()))
            })
            .map(|req| serde_json::from_slice(&req.body).expect("request body is JSON"))
            .collect()
    }

    /// Texts of all sendMessage requests, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.requests_to("sendMessage")
            .await
            .iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, endpoint: &str, times: usize) {
        let matching_requests = self.requests_to(endpoint).await.len();

        assert_eq!(
            matching_requests, times,
            "Expected {} calls to {}, but got {}",
            times, endpoint, matching_requests
        );
    }
}

/// A message sent by the bot into the test user's private chat
pub fn bot_message_json(text: &str) -> Value {
    json!({
        "message_id": 123,
        "from": {
            "id": 12345,
            "is_bot": true,
            "first_name": "TestBot",
            "username": "test_bot"
        },
        "chat": {
            "id": test_user_id(),
            "type": "private",
            "first_name": "Test"
        },
        "date": 1640995200,
        "text": text
    })
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID; private chats share the user's id
pub fn test_user_id() -> i64 {
    987654321
}
