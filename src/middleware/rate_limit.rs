//! Rate limiting middleware
//!
//! This module provides per-user rate limiting so a single chat cannot
//! exhaust the text generation quota.

use std::num::NonZeroU32;
use std::sync::Arc;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use tracing::{debug, warn};
use crate::config::RateLimitConfig;
use crate::utils::errors::{EngChatBotError, Result};

/// Rate limiting middleware
#[derive(Clone)]
pub struct RateLimitMiddleware {
    limiter: Option<Arc<DefaultKeyedRateLimiter<i64>>>,
}

impl RateLimitMiddleware {
    /// Create a new RateLimitMiddleware instance
    pub fn new(config: &RateLimitConfig) -> Self {
        if !config.enabled {
            return Self::disabled();
        }

        let per_minute = NonZeroU32::new(config.messages_per_minute).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst).unwrap_or(per_minute);
        let quota = Quota::per_minute(per_minute).allow_burst(burst);

        Self {
            limiter: Some(Arc::new(RateLimiter::keyed(quota))),
        }
    }

    /// Middleware that allows every request
    pub fn disabled() -> Self {
        Self { limiter: None }
    }

    /// Check if user is rate limited
    pub fn check_rate_limit(&self, user_id: i64) -> Result<()> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };

        match limiter.check_key(&user_id) {
            Ok(()) => {
                debug!(user_id = user_id, "Rate limit check passed");
                Ok(())
            }
            Err(_) => {
                warn!(user_id = user_id, "Rate limit exceeded");
                Err(EngChatBotError::RateLimitExceeded)
            }
        }
    }

    /// Whether limiting is active
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }
}

impl std::fmt::Debug for RateLimitMiddleware {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitMiddleware")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
