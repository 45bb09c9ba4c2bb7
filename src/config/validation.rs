//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{EngChatBotError, Result};
use super::{SessionBackendKind, Settings};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_gemini_config(&settings.gemini)?;
    validate_session_config(&settings.session)?;
    validate_rate_limit_config(&settings.rate_limit)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn require(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngChatBotError::Config(format!("{} is required", what)));
    }
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    require(&config.api_id, "Telegram API ID (API_ID)")?;
    require(&config.api_hash, "Telegram API hash (API_HASH)")?;
    require(&config.token, "Bot token (BOT_TOKEN)")?;

    if config.api_id.trim().parse::<i64>().is_err() {
        return Err(EngChatBotError::Config(
            format!("Telegram API ID must be numeric, got: {}", config.api_id)
        ));
    }

    Ok(())
}

/// Validate Gemini configuration
fn validate_gemini_config(config: &super::GeminiConfig) -> Result<()> {
    require(&config.api_key, "Gemini API key (GEMINI_API_KEY)")?;
    require(&config.model, "Gemini model name")?;
    require(&config.base_url, "Gemini base URL")?;

    if config.timeout_seconds == 0 {
        return Err(EngChatBotError::Config(
            "Gemini timeout must be greater than 0".to_string()
        ));
    }

    if config.max_retries > 5 {
        return Err(EngChatBotError::Config(
            format!("Gemini max retries must be at most 5, got: {}", config.max_retries)
        ));
    }

    Ok(())
}

/// Validate session store configuration
fn validate_session_config(config: &super::SessionConfig) -> Result<()> {
    if config.capacity == 0 {
        return Err(EngChatBotError::Config(
            "Session capacity must be greater than 0".to_string()
        ));
    }

    if config.ttl_seconds == 0 {
        return Err(EngChatBotError::Config(
            "Session TTL must be greater than 0".to_string()
        ));
    }

    if config.backend == SessionBackendKind::Redis {
        match config.redis_url.as_deref() {
            Some(url) if !url.trim().is_empty() => {}
            _ => {
                return Err(EngChatBotError::Config(
                    "Redis URL is required for the redis session backend".to_string()
                ));
            }
        }
    }

    Ok(())
}

/// Validate rate limit configuration
fn validate_rate_limit_config(config: &super::RateLimitConfig) -> Result<()> {
    if config.enabled && config.messages_per_minute == 0 {
        return Err(EngChatBotError::Config(
            "Messages per minute must be greater than 0 when rate limiting is enabled".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(EngChatBotError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(EngChatBotError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
