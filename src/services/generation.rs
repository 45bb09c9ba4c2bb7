//! Text generation backend interface
//!
//! Handlers only ever talk to [`TextGenerator`]; backend-specific request
//! construction stays inside the implementing adapter.

use async_trait::async_trait;
use crate::utils::errors::GenerationResult;

/// A single stateless generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// System-level directive (persona instruction)
    pub system_instruction: String,
    /// The user's message text
    pub user_text: String,
}

impl GenerationRequest {
    pub fn new(system_instruction: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_text: user_text.into(),
        }
    }
}

/// Backend capable of producing a reply for a generation request
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply. `Ok(None)` means the backend produced no text.
    async fn generate(&self, request: &GenerationRequest) -> GenerationResult<Option<String>>;

    /// Model identifier used for requests
    fn model(&self) -> &str;
}
