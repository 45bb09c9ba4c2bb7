//! Conversation service
//!
//! Turns one inbound message into one reply: resolve the user's scenario,
//! build the persona instruction, ask the generator, and map the outcome to
//! the text relayed to the user. Backend failures never escape this module.

use std::sync::Arc;
use tracing::{error, info};
use crate::middleware::RateLimitMiddleware;
use crate::state::{persona_instruction, SessionStore};
use crate::utils::errors::Result;
use crate::utils::helpers::truncate_text;
use crate::utils::logging;
use super::generation::{GenerationRequest, TextGenerator};

/// Sent when the backend returns no text
pub const FALLBACK_REPLY: &str = "Can you say that in another way?";

/// Sent when the backend call fails
pub const FAILURE_REPLY: &str = "❌ AI error. Please try again.";

/// Sent when a user exceeds the message rate limit
pub const RATE_LIMITED_REPLY: &str = "⏳ You're sending messages too fast. Please wait a moment.";

/// Outcome of a conversation turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text produced by the backend, relayed verbatim
    Generated(String),
    /// Backend succeeded without text
    Fallback,
    /// Backend failed; details are only logged
    Failed,
}

impl Reply {
    /// Text to send to the user
    pub fn text(&self) -> &str {
        match self {
            Reply::Generated(text) => text,
            Reply::Fallback => FALLBACK_REPLY,
            Reply::Failed => FAILURE_REPLY,
        }
    }
}

/// Service that answers user messages in the selected scenario
#[derive(Clone)]
pub struct ConversationService {
    sessions: SessionStore,
    generator: Arc<dyn TextGenerator>,
    rate_limiter: RateLimitMiddleware,
}

impl ConversationService {
    /// Create a new ConversationService instance
    pub fn new(
        sessions: SessionStore,
        generator: Arc<dyn TextGenerator>,
        rate_limiter: RateLimitMiddleware,
    ) -> Self {
        Self {
            sessions,
            generator,
            rate_limiter,
        }
    }

    /// Check whether the user may start another turn
    pub fn check_rate_limit(&self, user_id: i64) -> Result<()> {
        self.rate_limiter.check_rate_limit(user_id)
    }

    /// Produce the reply for one user message
    pub async fn respond(&self, user_id: i64, text: &str) -> Reply {
        let scenario = self.sessions.get(user_id).await;
        let request = GenerationRequest::new(persona_instruction(scenario), text);

        info!(
            user_id = user_id,
            scenario = %scenario,
            model = self.generator.model(),
            preview = %truncate_text(text, 40),
            "Generating reply"
        );

        match self.generator.generate(&request).await {
            Ok(Some(generated)) => {
                logging::log_generation(
                    user_id,
                    scenario.tag(),
                    text.chars().count(),
                    generated.chars().count(),
                );
                Reply::Generated(generated)
            }
            Ok(None) => {
                info!(user_id = user_id, scenario = %scenario, "Backend returned no text, sending fallback");
                Reply::Fallback
            }
            Err(e) => {
                error!(user_id = user_id, scenario = %scenario, error = %e, "Text generation failed");
                logging::log_api_error("gemini", &e.to_string(), Some(scenario.tag()));
                Reply::Failed
            }
        }
    }

    /// Session store used for scenario lookups
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}
