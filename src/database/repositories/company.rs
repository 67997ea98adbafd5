//! Company repository implementation

use sqlx::PgPool;
use crate::models::{Company, NewCompany};
use crate::utils::errors::{map_unique_violation, SubDeskError};

const COMPANY_COLUMNS: &str = "id, name, company_type, inn, created_at";

#[derive(Debug, Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all companies ordered by name. Companies carry no operator
    /// dimension.
    pub async fn list(&self) -> Result<Vec<Company>, SubDeskError> {
        let companies = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    /// Exact-match lookup by INN
    pub async fn find_by_inn(&self, inn: &str) -> Result<Option<Company>, SubDeskError> {
        let company = sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE inn = $1"
        ))
        .bind(inn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(company)
    }

    /// Insert a new company. A duplicate INN surfaces as `UniqueViolation`.
    pub async fn create(&self, request: NewCompany) -> Result<Company, SubDeskError> {
        let company = sqlx::query_as::<_, Company>(&format!(
            r#"
            INSERT INTO companies (name, company_type, inn)
            VALUES ($1, $2, $3)
            RETURNING {COMPANY_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.company_type)
        .bind(request.inn)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, "inn"))?;

        Ok(company)
    }

    /// Update a company's name by row id, returning the number of affected rows
    pub async fn update_name(&self, id: i64, name: &str) -> Result<u64, SubDeskError> {
        let result = sqlx::query("UPDATE companies SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a company by INN, returning the number of affected rows
    pub async fn delete_by_inn(&self, inn: &str) -> Result<u64, SubDeskError> {
        let result = sqlx::query("DELETE FROM companies WHERE inn = $1")
            .bind(inn)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
