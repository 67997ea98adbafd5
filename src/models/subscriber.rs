//! Subscriber model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subscriber record owned by exactly one operator.
///
/// The phone number is globally unique across all operators; `company_id`
/// optionally links the subscriber to a legal entity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscriber {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub operator_id: i64,
    pub company_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubscriber {
    pub last_name: String,
    pub first_name: String,
    pub phone: String,
    pub address: Option<String>,
    pub operator_id: i64,
}
