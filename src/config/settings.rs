//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Environment variables that carry the required secrets, keyed by their
/// location in the settings tree.
const SECRET_ENV_VARS: [(&str, &str); 4] = [
    ("bot.api_id", "API_ID"),
    ("bot.api_hash", "API_HASH"),
    ("bot.token", "BOT_TOKEN"),
    ("gemini.api_key", "GEMINI_API_KEY"),
];

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub bot: BotConfig,
    pub gemini: GeminiConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BotConfig {
    /// Telegram application id
    #[serde(default)]
    pub api_id: String,
    /// Telegram application secret
    #[serde(default)]
    pub api_hash: String,
    /// Bot API token
    #[serde(default)]
    pub token: String,
}

/// Gemini text generation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

/// Which session store backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionBackendKind {
    Memory,
    Redis,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    pub backend: SessionBackendKind,
    /// Maximum number of sessions kept by the memory backend
    pub capacity: usize,
    pub ttl_seconds: u64,
    pub redis_url: Option<String>,
    pub redis_prefix: String,
}

/// Per-user rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub messages_per_minute: u32,
    pub burst: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily rolling log files; stdout only when absent
    pub directory: Option<String>,
}

impl Settings {
    /// Load settings from `config.toml` and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(config::File::with_name("config").required(false))
    }

    /// Load settings from an explicit configuration file
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        Self::load(config::File::from(path))
    }

    fn load<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let defaults = Settings::default();
        let mut builder = config::Config::builder()
            .set_default("gemini.model", defaults.gemini.model)?
            .set_default("gemini.base_url", defaults.gemini.base_url)?
            .set_default("gemini.timeout_seconds", defaults.gemini.timeout_seconds as i64)?
            .set_default("gemini.max_retries", defaults.gemini.max_retries as i64)?
            .set_default("session.backend", "memory")?
            .set_default("session.capacity", defaults.session.capacity as i64)?
            .set_default("session.ttl_seconds", defaults.session.ttl_seconds as i64)?
            .set_default("session.redis_prefix", defaults.session.redis_prefix)?
            .set_default("rate_limit.enabled", defaults.rate_limit.enabled)?
            .set_default("rate_limit.messages_per_minute", defaults.rate_limit.messages_per_minute as i64)?
            .set_default("rate_limit.burst", defaults.rate_limit.burst as i64)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("ENGCHATBOT")
                    .prefix_separator("__")
                    .separator("__"),
            );

        for (key, var) in SECRET_ENV_VARS {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::EngChatBotError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig::default(),
            gemini: GeminiConfig {
                api_key: String::new(),
                model: "gemini-1.5-flash".to_string(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                timeout_seconds: 30,
                max_retries: 0,
            },
            session: SessionConfig {
                backend: SessionBackendKind::Memory,
                capacity: 10_000,
                ttl_seconds: 86_400,
                redis_url: None,
                redis_prefix: "engchatbot:".to_string(),
            },
            rate_limit: RateLimitConfig {
                enabled: true,
                messages_per_minute: 20,
                burst: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                directory: None,
            },
        }
    }
}
