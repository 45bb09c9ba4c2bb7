//! State management module
//!
//! This module handles scenario definitions and per-user session storage

pub mod scenarios;
pub mod storage;

// Re-export commonly used state components
pub use scenarios::{Scenario, persona_instruction, persona_instruction_for_tag};
pub use storage::{SessionStore, SessionBackend, MemorySessionBackend, RedisSessionBackend};
