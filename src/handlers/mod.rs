//! Telegram update handlers

pub mod keyboards;
pub mod messages;

pub use messages::{handle_message, handle_start};
