//! Reply keyboard layouts
//!
//! Renders the menu screens the controller names into Telegram reply
//! keyboards. The button captions double as the command vocabulary the
//! controller matches on.

use teloxide::types::{KeyboardButton, KeyboardMarkup};
use crate::conversation::commands;
use crate::conversation::Screen;

/// Build the reply keyboard for a controller-named screen.
pub fn screen_keyboard(screen: Screen) -> KeyboardMarkup {
    match screen {
        Screen::Main => main_menu(),
        Screen::SubscriberActions => subscriber_actions_menu(),
        Screen::CompanyActions => company_actions_menu(),
    }
}

fn main_menu() -> KeyboardMarkup {
    resized(KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(commands::LIST_SUBSCRIBERS),
            KeyboardButton::new(commands::SEARCH_SUBSCRIBER),
        ],
        vec![
            KeyboardButton::new(commands::SUBSCRIBER_ACTIONS),
            KeyboardButton::new(commands::COMPANY_ACTIONS),
        ],
        vec![KeyboardButton::new(commands::RESTART)],
    ]))
}

fn subscriber_actions_menu() -> KeyboardMarkup {
    resized(KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(commands::ADD_SUBSCRIBER),
            KeyboardButton::new(commands::EDIT_SUBSCRIBER),
        ],
        vec![
            KeyboardButton::new(commands::ASSIGN_TO_COMPANY),
            KeyboardButton::new(commands::DELETE_SUBSCRIBER),
        ],
        vec![KeyboardButton::new(commands::BACK)],
    ]))
}

fn company_actions_menu() -> KeyboardMarkup {
    resized(KeyboardMarkup::new(vec![
        vec![
            KeyboardButton::new(commands::ADD_COMPANY),
            KeyboardButton::new(commands::EDIT_COMPANY),
        ],
        vec![
            KeyboardButton::new(commands::DELETE_COMPANY),
            KeyboardButton::new(commands::LIST_COMPANIES),
        ],
        vec![KeyboardButton::new(commands::BACK)],
    ]))
}

fn resized(mut markup: KeyboardMarkup) -> KeyboardMarkup {
    markup.resize_keyboard = true;
    markup
}
