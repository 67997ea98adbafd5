//! Conversation state machine
//!
//! Transport-independent dialog handling: the menu vocabulary, the reply
//! texts, and the controller advancing per-operator flows.

pub mod commands;
pub mod controller;
pub mod texts;

pub use commands::MenuCommand;
pub use controller::{ConversationController, Reply, Screen};
