//! Entity store abstraction
//!
//! The conversation layer talks to persistence through this trait so the
//! flow logic can be exercised against an in-memory store in tests. Every
//! method is one logical unit of work; uniqueness is enforced by the store
//! itself (duplicate keys come back as `UniqueViolation`), and the
//! update/delete operations report affected-row counts so callers can treat
//! zero rows as a not-found condition instead of a fatal error.

use async_trait::async_trait;
use crate::models::{Company, NewCompany, NewSubscriber, Operator, Subscriber};
use crate::utils::errors::Result;

#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Read-or-insert the operator row for a Telegram identity.
    async fn get_or_create_operator(&self, telegram_id: i64) -> Result<Operator>;

    /// An operator's own subscribers, ordered by last name.
    async fn list_subscribers(&self, operator_id: i64) -> Result<Vec<Subscriber>>;

    /// Exact-match lookup by phone, unscoped (phones are globally unique).
    async fn find_subscriber_by_phone(&self, phone: &str) -> Result<Option<Subscriber>>;

    async fn insert_subscriber(&self, subscriber: NewSubscriber) -> Result<Subscriber>;

    async fn update_subscriber_first_name(&self, id: i64, first_name: &str) -> Result<u64>;

    async fn update_subscriber_company(&self, id: i64, company_id: i64) -> Result<u64>;

    async fn delete_subscriber_by_phone(&self, phone: &str) -> Result<u64>;

    /// All companies, ordered by name. No operator dimension.
    async fn list_companies(&self) -> Result<Vec<Company>>;

    async fn find_company_by_inn(&self, inn: &str) -> Result<Option<Company>>;

    async fn insert_company(&self, company: NewCompany) -> Result<Company>;

    async fn update_company_name(&self, id: i64, name: &str) -> Result<u64>;

    async fn delete_company_by_inn(&self, inn: &str) -> Result<u64>;
}
