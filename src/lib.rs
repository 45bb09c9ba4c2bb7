//! EngChatBot Telegram Bot
//!
//! A Telegram bot for practicing conversational English. Users pick a
//! role-play scenario and every text message is answered by a generative
//! language model speaking in that scenario's persona.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod state;
pub mod utils;
pub mod middleware;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EngChatBotError, GenerationError, Result};

// Re-export main components for easy access
pub use services::{ConversationService, GeminiClient, ServiceFactory, TextGenerator};
pub use state::{Scenario, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
