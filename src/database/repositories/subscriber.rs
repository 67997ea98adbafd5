//! Subscriber repository implementation

use sqlx::PgPool;
use crate::models::{NewSubscriber, Subscriber};
use crate::utils::errors::{map_unique_violation, SubDeskError};

const SUBSCRIBER_COLUMNS: &str =
    "id, last_name, first_name, phone, address, operator_id, company_id, created_at";

#[derive(Debug, Clone)]
pub struct SubscriberRepository {
    pool: PgPool,
}

impl SubscriberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List an operator's subscribers ordered by last name
    pub async fn list_by_operator(&self, operator_id: i64) -> Result<Vec<Subscriber>, SubDeskError> {
        let subscribers = sqlx::query_as::<_, Subscriber>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE operator_id = $1 ORDER BY last_name"
        ))
        .bind(operator_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(subscribers)
    }

    /// Exact-match lookup by phone. Unscoped: phone numbers are globally
    /// unique, so the match is unambiguous across operators.
    pub async fn find_by_phone(&self, phone: &str) -> Result<Option<Subscriber>, SubDeskError> {
        let subscriber = sqlx::query_as::<_, Subscriber>(&format!(
            "SELECT {SUBSCRIBER_COLUMNS} FROM subscribers WHERE phone = $1"
        ))
        .bind(phone)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subscriber)
    }

    /// Insert a new subscriber. A duplicate phone surfaces as
    /// `UniqueViolation` rather than a bare database error.
    pub async fn create(&self, request: NewSubscriber) -> Result<Subscriber, SubDeskError> {
        let subscriber = sqlx::query_as::<_, Subscriber>(&format!(
            r#"
            INSERT INTO subscribers (last_name, first_name, phone, address, operator_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SUBSCRIBER_COLUMNS}
            "#
        ))
        .bind(request.last_name)
        .bind(request.first_name)
        .bind(request.phone)
        .bind(request.address)
        .bind(request.operator_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "phone"))?;

        Ok(subscriber)
    }

    /// Update a subscriber's first name by row id, returning the number of
    /// affected rows. Zero means the target vanished since lookup.
    pub async fn update_first_name(&self, id: i64, first_name: &str) -> Result<u64, SubDeskError> {
        let result = sqlx::query("UPDATE subscribers SET first_name = $2 WHERE id = $1")
            .bind(id)
            .bind(first_name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Link a subscriber to a company by row id
    pub async fn update_company(&self, id: i64, company_id: i64) -> Result<u64, SubDeskError> {
        let result = sqlx::query("UPDATE subscribers SET company_id = $2 WHERE id = $1")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a subscriber by phone, returning the number of affected rows
    pub async fn delete_by_phone(&self, phone: &str) -> Result<u64, SubDeskError> {
        let result = sqlx::query("DELETE FROM subscribers WHERE phone = $1")
            .bind(phone)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
