//! Message handlers module
//!
//! Handles incoming text messages by relaying them to the text generation
//! backend in the user's selected scenario.

use teloxide::{Bot, types::{ChatAction, ChatId, Message}, prelude::*};
use tracing::{debug, warn};
use crate::services::{ServiceFactory, RATE_LIMITED_REPLY};
use crate::utils::errors::{EngChatBotError, Result};
use crate::utils::helpers::split_message;
use crate::utils::logging;

/// Telegram limit for a single text message, in characters
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Handle incoming text messages
pub async fn handle_message(bot: Bot, msg: Message, services: &ServiceFactory) -> Result<()> {
    let user = msg.from.as_ref().ok_or_else(|| {
        EngChatBotError::InvalidInput("No user in message".to_string())
    })?;
    let user_id = user.id.0 as i64;
    let chat_id = msg.chat.id;

    let Some(text) = msg.text() else {
        debug!(user_id = user_id, chat_id = ?chat_id, "Ignoring non-text message");
        return Ok(());
    };

    handle_text(&bot, chat_id, user_id, text, services).await
}

/// Run one conversation turn for a text message
pub async fn handle_text(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    text: &str,
    services: &ServiceFactory,
) -> Result<()> {
    debug!(user_id = user_id, chat_id = ?chat_id, "Processing text message");

    if services.conversation.check_rate_limit(user_id).is_err() {
        bot.send_message(chat_id, RATE_LIMITED_REPLY).await?;
        return Ok(());
    }

    if let Err(e) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
        warn!(user_id = user_id, error = %e, "Failed to send typing indicator");
    }

    let reply = services.conversation.respond(user_id, text).await;

    for chunk in split_message(reply.text(), MAX_MESSAGE_CHARS) {
        bot.send_message(chat_id, chunk).await?;
    }

    logging::log_user_action(user_id, "chat", None);
    Ok(())
}
