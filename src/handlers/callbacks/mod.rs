//! Callback query handlers module
//!
//! This module contains handlers for all inline keyboard button callbacks

use teloxide::{Bot, types::{CallbackQuery, ChatId, MaybeInaccessibleMessage}, prelude::*};
use tracing::{info, debug, warn, error};
use crate::handlers::menu::{self, CallbackAction, MenuTarget};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Main callback query dispatcher
pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    services: &ServiceFactory,
) -> Result<()> {
    let user_id = query.from.id.0 as i64;

    let target = match &query.message {
        Some(MaybeInaccessibleMessage::Regular(message)) => MenuTarget::edit(message.chat.id, message.id),
        Some(other) => MenuTarget::send(other.chat().id),
        None => MenuTarget::send(ChatId(user_id)),
    };

    debug!(user_id = user_id, chat_id = ?target.chat_id, callback_data = ?query.data, "Processing callback query");

    let action = query.data.as_deref().and_then(CallbackAction::parse);

    let outcome = match action {
        Some(action) => handle_callback_action(&bot, target, user_id, action, services).await,
        None => {
            warn!(user_id = user_id, callback_data = ?query.data, "Unknown callback action");
            Ok(None)
        }
    };

    // Always acknowledge so the client stops showing the loading state
    let toast = outcome.as_ref().ok().cloned().flatten();
    let answer = bot.answer_callback_query(query.id.clone());
    let answered = match toast {
        Some(text) => answer.text(text).await,
        None => answer.await,
    };
    if let Err(e) = answered {
        warn!(error = %e, callback_id = ?query.id, "Failed to answer callback query");
    }

    outcome.map(|_| ())
}

/// Perform a callback action, returning optional toast text for the acknowledgement
pub async fn handle_callback_action(
    bot: &Bot,
    target: MenuTarget,
    user_id: i64,
    action: CallbackAction,
    services: &ServiceFactory,
) -> Result<Option<String>> {
    match action {
        CallbackAction::ShowScenarios => {
            let current = services.sessions.get(user_id).await;
            menu::render(bot, target, menu::scenario_menu_text(current), Some(menu::scenario_keyboard())).await?;
            Ok(None)
        }
        CallbackAction::ShowSettings => {
            let current = services.sessions.get(user_id).await;
            menu::render(bot, target, menu::settings_text(current), Some(menu::settings_keyboard())).await?;
            Ok(None)
        }
        CallbackAction::ShowHelp => {
            menu::render(bot, target, menu::HELP_TEXT.to_string(), None).await?;
            Ok(None)
        }
        CallbackAction::SelectScenario(scenario) => {
            if let Err(e) = services.sessions.set(user_id, scenario).await {
                error!(user_id = user_id, scenario = %scenario, error = %e, "Failed to store scenario");
                menu::render(bot, target, menu::SAVE_FAILED_TEXT.to_string(), Some(menu::scenario_keyboard())).await?;
                return Ok(None);
            }

            info!(user_id = user_id, scenario = %scenario, "Scenario selected");
            logging::log_user_action(user_id, "select_scenario", Some(scenario.tag()));

            menu::render(bot, target, menu::scenario_selected_text(scenario), None).await?;
            Ok(Some(format!("Scenario: {}", scenario.label())))
        }
    }
}
