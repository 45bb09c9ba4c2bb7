//! Services module
//!
//! This module contains business logic services

pub mod conversation;
pub mod gemini;
pub mod generation;

// Re-export commonly used services
pub use conversation::{ConversationService, Reply, FALLBACK_REPLY, FAILURE_REPLY, RATE_LIMITED_REPLY};
pub use gemini::GeminiClient;
pub use generation::{GenerationRequest, TextGenerator};

use std::sync::Arc;
use tracing::info;
use crate::config::settings::Settings;
use crate::middleware::RateLimitMiddleware;
use crate::state::SessionStore;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub sessions: SessionStore,
    pub conversation: ConversationService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub async fn new(settings: &Settings) -> Result<Self> {
        let sessions = SessionStore::from_config(&settings.session).await?;
        let generator = Arc::new(GeminiClient::new(&settings.gemini)?);
        let rate_limiter = RateLimitMiddleware::new(&settings.rate_limit);

        info!(
            model = %settings.gemini.model,
            session_backend = sessions.backend_name(),
            rate_limit = rate_limiter.is_enabled(),
            "Services initialized"
        );

        Ok(Self::from_parts(sessions, generator, rate_limiter))
    }

    /// Assemble services from already constructed parts
    pub fn from_parts(
        sessions: SessionStore,
        generator: Arc<dyn TextGenerator>,
        rate_limiter: RateLimitMiddleware,
    ) -> Self {
        let conversation = ConversationService::new(sessions.clone(), generator, rate_limiter);

        Self {
            sessions,
            conversation,
        }
    }

    /// Health check for all services
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let session_store_healthy = self.sessions.len().await.is_ok();

        ServiceHealthStatus {
            session_store_healthy,
            session_backend: self.sessions.backend_name(),
        }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub session_store_healthy: bool,
    pub session_backend: &'static str,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.session_store_healthy
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.session_store_healthy {
            issues.push(format!("Session store ({}) unavailable", self.session_backend));
        }

        issues
    }
}
