//! Error handling for EngChatBot
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for EngChatBot application
#[derive(Error, Debug)]
pub enum EngChatBotError {
    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Text generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Text generation backend errors
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Generation request failed: {0}")]
    RequestFailed(String),

    #[error("Generation request timed out")]
    Timeout,

    #[error("Generation quota exceeded: {0}")]
    Quota(String),

    #[error("Prompt blocked by backend: {0}")]
    Blocked(String),

    #[error("Invalid generation response: {0}")]
    InvalidResponse(String),

    #[error("Generation service unavailable")]
    ServiceUnavailable,
}

/// Result type alias for EngChatBot operations
pub type Result<T> = std::result::Result<T, EngChatBotError>;

/// Result type alias for text generation operations
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;

impl GenerationError {
    /// Whether another attempt at the same request may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::Timeout => true,
            GenerationError::ServiceUnavailable => true,
            GenerationError::Quota(_) => true,
            GenerationError::RequestFailed(_) => false,
            GenerationError::Blocked(_) => false,
            GenerationError::InvalidResponse(_) => false,
        }
    }
}

impl EngChatBotError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngChatBotError::Telegram(_) => true,
            EngChatBotError::Generation(_) => true,
            EngChatBotError::Config(_) => false,
            EngChatBotError::ConfigLoad(_) => false,
            EngChatBotError::Redis(_) => true,
            EngChatBotError::Http(_) => true,
            EngChatBotError::Serialization(_) => false,
            EngChatBotError::Io(_) => true,
            EngChatBotError::RateLimitExceeded => true,
            EngChatBotError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EngChatBotError::Config(_) => ErrorSeverity::Critical,
            EngChatBotError::ConfigLoad(_) => ErrorSeverity::Critical,
            EngChatBotError::RateLimitExceeded => ErrorSeverity::Warning,
            EngChatBotError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
