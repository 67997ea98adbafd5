//! SubDesk Telegram Bot
//!
//! A Telegram bot through which an operator keeps records of individual
//! subscribers and legal-entity companies. The heart of the crate is the
//! conversation state machine in [`conversation`], which advances
//! per-operator multi-step flows against a PostgreSQL-backed entity store.

#![allow(non_snake_case)]

pub mod config;
pub mod conversation;
pub mod database;
pub mod handlers;
pub mod models;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use conversation::{ConversationController, Reply, Screen};
pub use database::{DatabaseService, EntityStore};
pub use state::{FlowState, SessionStore};
pub use utils::errors::{Result, SubDeskError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
