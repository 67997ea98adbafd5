//! Company (legal entity) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A legal-entity record, global to all operators. The INN (tax id) is
/// globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub company_type: String,
    pub inn: String,
    pub created_at: DateTime<Utc>,
}

/// Fields required to insert a new company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub company_type: String,
    pub inn: String,
}
