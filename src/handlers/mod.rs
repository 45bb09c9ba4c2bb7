//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//! - Message handlers for free-text conversation turns
//! - Menu texts and keyboards shared by commands and callbacks

pub mod commands;
pub mod callbacks;
pub mod messages;
pub mod menu;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command};
pub use callbacks::{handle_callback_action, handle_callback_query};
pub use messages::{handle_message, handle_text};
pub use menu::{CallbackAction, MenuTarget};
