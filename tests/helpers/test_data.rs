//! Test data helpers
//!
//! Scripted text generator, service builders and Telegram update payloads.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use serde_json::json;
use teloxide::types::{CallbackQuery, Message};
use EngChatBot::{
    config::RateLimitConfig,
    middleware::RateLimitMiddleware,
    services::{GenerationRequest, ServiceFactory, TextGenerator},
    state::SessionStore,
    utils::errors::GenerationResult,
};
use super::telegram_mock::test_user_id;

/// Generator that records requests and replies with a fixed outcome
pub struct ScriptedGenerator {
    outcome: fn() -> GenerationResult<Option<String>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new(outcome: fn() -> GenerationResult<Option<String>>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<Option<String>> {
        self.requests.lock().unwrap().push(request.clone());
        (self.outcome)()
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Services backed by an in-memory store and no rate limiting
pub fn test_services(generator: Arc<ScriptedGenerator>) -> ServiceFactory {
    ServiceFactory::from_parts(
        SessionStore::in_memory(100, Duration::from_secs(3600)),
        generator,
        RateLimitMiddleware::disabled(),
    )
}

/// Services that allow a single message per user per minute
pub fn rate_limited_services(generator: Arc<ScriptedGenerator>) -> ServiceFactory {
    let config = RateLimitConfig {
        enabled: true,
        messages_per_minute: 1,
        burst: 1,
    };
    ServiceFactory::from_parts(
        SessionStore::in_memory(100, Duration::from_secs(3600)),
        generator,
        RateLimitMiddleware::new(&config),
    )
}

fn user_json(user_id: i64) -> serde_json::Value {
    json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "Test",
        "username": "test_user",
        "language_code": "en"
    })
}

/// Incoming private text message from the test user
pub fn create_text_message(text: &str) -> Message {
    let user_id = test_user_id();
    serde_json::from_value(json!({
        "message_id": 77,
        "from": user_json(user_id),
        "chat": { "id": user_id, "type": "private", "first_name": "Test" },
        "date": 1640995200,
        "text": text
    }))
    .expect("valid message json")
}

/// Callback query pressed on a bot menu message in the test user's chat
pub fn create_callback_query(data: &str) -> CallbackQuery {
    let user_id = test_user_id();
    serde_json::from_value(json!({
        "id": "callback-1",
        "from": user_json(user_id),
        "message": {
            "message_id": 42,
            "from": { "id": 12345, "is_bot": true, "first_name": "TestBot" },
            "chat": { "id": user_id, "type": "private", "first_name": "Test" },
            "date": 1640995200,
            "text": "menu"
        },
        "chat_instance": "instance-1",
        "data": data
    }))
    .expect("valid callback query json")
}
