//! Start command handler
//!
//! Handles the /start and /scenario commands, both of which open a menu
//! showing the user's current scenario.

use teloxide::{Bot, types::ChatId};
use tracing::debug;
use crate::handlers::menu::{self, MenuTarget};
use crate::services::ServiceFactory;
use crate::utils::errors::Result;
use crate::utils::logging;

/// Handle /start command - greet the user and show the main menu
pub async fn handle_start(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    services: &ServiceFactory,
) -> Result<()> {
    debug!(user_id = user_id, chat_id = ?chat_id, "Processing /start command");

    let current = services.sessions.get(user_id).await;
    menu::render(
        bot,
        MenuTarget::send(chat_id),
        menu::welcome_text(current),
        Some(menu::main_menu_keyboard()),
    )
    .await?;

    logging::log_user_action(user_id, "start", Some(current.tag()));
    Ok(())
}

/// Handle /scenario command - show the scenario picker directly
pub async fn handle_scenario_menu(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    services: &ServiceFactory,
) -> Result<()> {
    debug!(user_id = user_id, chat_id = ?chat_id, "Processing /scenario command");

    let current = services.sessions.get(user_id).await;
    menu::render(
        bot,
        MenuTarget::send(chat_id),
        menu::scenario_menu_text(current),
        Some(menu::scenario_keyboard()),
    )
    .await
}
