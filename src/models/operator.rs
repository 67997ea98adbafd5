//! Operator model
//!
//! One row per distinct Telegram identity. Created lazily on first
//! interaction and never deleted by this subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operator {
    pub id: i64,
    pub telegram_id: i64,
    pub display_name: Option<String>,
    pub created_at: DateTime<Utc>,
}
