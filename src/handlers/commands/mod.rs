//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /help, etc.

pub mod start;
pub mod help;

use teloxide::{Bot, types::Message, utils::command::BotCommands};
use crate::utils::errors::{EngChatBotError, Result};
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "EngChatBot commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the main menu")]
    Start,
    #[command(description = "Show help information")]
    Help,
    #[command(description = "Choose a practice scenario")]
    Scenario,
}

/// Main command dispatcher
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: &ServiceFactory,
) -> Result<()> {
    let user_id = msg
        .from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .ok_or_else(|| EngChatBotError::InvalidInput("No user in message".to_string()))?;
    let chat_id = msg.chat.id;

    match cmd {
        Command::Start => start::handle_start(&bot, chat_id, user_id, services).await,
        Command::Help => help::handle_help(&bot, chat_id).await,
        Command::Scenario => start::handle_scenario_menu(&bot, chat_id, user_id, services).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/start", "eng_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/help", "eng_bot").unwrap(), Command::Help);
        assert_eq!(Command::parse("/scenario", "eng_bot").unwrap(), Command::Scenario);
        assert!(Command::parse("/unknown", "eng_bot").is_err());
    }
}
