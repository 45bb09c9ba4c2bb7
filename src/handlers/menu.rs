//! Menu texts, keyboards and callback data
//!
//! Every inline button carries callback data of the form `action:argument`.

use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId},
};
use crate::state::Scenario;
use crate::utils::errors::Result;
use crate::utils::helpers::parse_callback_data;

pub const HELP_TEXT: &str = "Send any message and I'll reply in simple English.\n\
    Use scenarios to practice different situations.";

pub const SAVE_FAILED_TEXT: &str = "❌ Could not save your scenario. Please try again.";

/// Action requested by an inline button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    ShowScenarios,
    ShowSettings,
    ShowHelp,
    SelectScenario(Scenario),
}

impl CallbackAction {
    /// Parse callback data; `None` for unrecognised actions
    pub fn parse(data: &str) -> Option<Self> {
        match parse_callback_data(data) {
            ("menu", Some("scenarios")) => Some(CallbackAction::ShowScenarios),
            ("menu", Some("settings")) => Some(CallbackAction::ShowSettings),
            ("menu", Some("help")) => Some(CallbackAction::ShowHelp),
            ("scenario", Some(tag)) => Some(CallbackAction::SelectScenario(Scenario::from_tag(tag))),
            _ => None,
        }
    }

    /// Callback data for this action
    pub fn data(&self) -> String {
        match self {
            CallbackAction::ShowScenarios => "menu:scenarios".to_string(),
            CallbackAction::ShowSettings => "menu:settings".to_string(),
            CallbackAction::ShowHelp => "menu:help".to_string(),
            CallbackAction::SelectScenario(scenario) => format!("scenario:{}", scenario.tag()),
        }
    }
}

fn button(text: &str, action: CallbackAction) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text.to_string(), action.data())
}

pub fn welcome_text(current: Scenario) -> String {
    format!(
        "👋 Welcome to English Practice Bot!\n\nCurrent Scenario: {}\n\nChoose a scenario to begin:",
        current.label()
    )
}

pub fn scenario_menu_text(current: Scenario) -> String {
    format!("Current: {}\n\nChoose a scenario:", current.label())
}

pub fn scenario_selected_text(selected: Scenario) -> String {
    format!("✅ Scenario set to {}.\n\nStart chatting!", selected.label())
}

pub fn settings_text(current: Scenario) -> String {
    format!("⚙ Settings\n\nCurrent Scenario: {}", current.label())
}

pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button("✨ Choose Scenario", CallbackAction::ShowScenarios)],
        vec![button("⚙ Settings", CallbackAction::ShowSettings)],
    ])
}

pub fn scenario_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(
        Scenario::ALL
            .iter()
            .map(|scenario| vec![button(scenario.button_text(), CallbackAction::SelectScenario(*scenario))])
            .collect::<Vec<_>>(),
    )
}

pub fn settings_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![button("📚 Change Scenario", CallbackAction::ShowScenarios)],
        vec![button("❓ Help", CallbackAction::ShowHelp)],
    ])
}

/// Where a menu view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuTarget {
    pub chat_id: ChatId,
    /// Message to edit in place; a new message is sent when absent
    pub message_id: Option<MessageId>,
}

impl MenuTarget {
    pub fn edit(chat_id: ChatId, message_id: MessageId) -> Self {
        Self { chat_id, message_id: Some(message_id) }
    }

    pub fn send(chat_id: ChatId) -> Self {
        Self { chat_id, message_id: None }
    }
}

/// Render a view by editing the target message or sending a new one
pub async fn render(
    bot: &Bot,
    target: MenuTarget,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    match target.message_id {
        Some(message_id) => {
            let request = bot.edit_message_text(target.chat_id, message_id, text);
            match keyboard {
                Some(keyboard) => request.reply_markup(keyboard).await?,
                None => request.await?,
            };
        }
        None => {
            let request = bot.send_message(target.chat_id, text);
            match keyboard {
                Some(keyboard) => request.reply_markup(keyboard).await?,
                None => request.await?,
            };
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(keyboard: &InlineKeyboardMarkup) -> Vec<String> {
        keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_menu_actions() {
        assert_eq!(CallbackAction::parse("menu:scenarios"), Some(CallbackAction::ShowScenarios));
        assert_eq!(CallbackAction::parse("menu:settings"), Some(CallbackAction::ShowSettings));
        assert_eq!(CallbackAction::parse("menu:help"), Some(CallbackAction::ShowHelp));
        assert_eq!(CallbackAction::parse("menu:unknown"), None);
        assert_eq!(CallbackAction::parse("garbage"), None);
    }

    #[test]
    fn test_parse_scenario_normalises_unknown_tags() {
        assert_eq!(
            CallbackAction::parse("scenario:travel"),
            Some(CallbackAction::SelectScenario(Scenario::Travel))
        );
        assert_eq!(
            CallbackAction::parse("scenario:pirate"),
            Some(CallbackAction::SelectScenario(Scenario::Casual))
        );
    }

    #[test]
    fn test_keyboard_data_parses_back() {
        for keyboard in [main_menu_keyboard(), scenario_keyboard(), settings_keyboard()] {
            for data in callback_data(&keyboard) {
                assert!(CallbackAction::parse(&data).is_some(), "unparseable callback data: {}", data);
            }
        }
    }

    #[test]
    fn test_scenario_keyboard_lists_every_scenario() {
        let data = callback_data(&scenario_keyboard());
        assert_eq!(data, vec!["scenario:dating", "scenario:job", "scenario:travel", "scenario:casual"]);
    }

    #[test]
    fn test_texts_show_scenario_label() {
        assert!(welcome_text(Scenario::Casual).contains("Current Scenario: Casual"));
        assert!(scenario_menu_text(Scenario::Job).starts_with("Current: Job"));
        assert_eq!(scenario_selected_text(Scenario::Travel), "✅ Scenario set to Travel.\n\nStart chatting!");
        assert!(settings_text(Scenario::Dating).ends_with("Current Scenario: Dating"));
    }
}
