//! Operator repository implementation

use sqlx::PgPool;
use crate::models::Operator;
use crate::utils::errors::SubDeskError;

#[derive(Debug, Clone)]
pub struct OperatorRepository {
    pool: PgPool,
}

impl OperatorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read-or-insert an operator by Telegram id.
    ///
    /// A concurrent duplicate insert is tolerated: `ON CONFLICT DO NOTHING`
    /// yields no row, and the existing one is re-read.
    pub async fn get_or_create(&self, telegram_id: i64) -> Result<Operator, SubDeskError> {
        if let Some(operator) = self.find_by_telegram_id(telegram_id).await? {
            return Ok(operator);
        }

        let inserted = sqlx::query_as::<_, Operator>(
            r#"
            INSERT INTO operators (telegram_id)
            VALUES ($1)
            ON CONFLICT (telegram_id) DO NOTHING
            RETURNING id, telegram_id, display_name, created_at
            "#,
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(operator) => Ok(operator),
            None => {
                // Lost the race; the row exists now.
                let operator = self.find_by_telegram_id(telegram_id).await?;
                operator.ok_or(sqlx::Error::RowNotFound).map_err(Into::into)
            }
        }
    }

    /// Find operator by Telegram ID
    pub async fn find_by_telegram_id(
        &self,
        telegram_id: i64,
    ) -> Result<Option<Operator>, SubDeskError> {
        let operator = sqlx::query_as::<_, Operator>(
            "SELECT id, telegram_id, display_name, created_at FROM operators WHERE telegram_id = $1",
        )
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(operator)
    }
}
