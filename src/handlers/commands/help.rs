//! Help command handler

use teloxide::{Bot, types::ChatId, prelude::*};
use crate::handlers::menu::HELP_TEXT;
use crate::utils::errors::Result;

/// Handle /help command
pub async fn handle_help(bot: &Bot, chat_id: ChatId) -> Result<()> {
    let help_text = format!(
        "🤖 English Practice Bot\n\n\
         {}\n\n\
         /start - Show the main menu\n\
         /scenario - Choose a practice scenario\n\
         /help - Show this help message",
        HELP_TEXT
    );

    bot.send_message(chat_id, help_text).await?;
    Ok(())
}
