//! Database service layer
//!
//! High-level interface aggregating the repositories and implementing the
//! `EntityStore` seam the conversation controller depends on.

use async_trait::async_trait;
use crate::database::{CompanyRepository, DatabasePool, OperatorRepository, SubscriberRepository};
use crate::database::store::EntityStore;
use crate::models::{Company, NewCompany, NewSubscriber, Operator, Subscriber};
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub operators: OperatorRepository,
    pub subscribers: SubscriberRepository,
    pub companies: CompanyRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            operators: OperatorRepository::new(pool.clone()),
            subscribers: SubscriberRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }
}

#[async_trait]
impl EntityStore for DatabaseService {
    async fn get_or_create_operator(&self, telegram_id: i64) -> Result<Operator> {
        self.operators.get_or_create(telegram_id).await
    }

    async fn list_subscribers(&self, operator_id: i64) -> Result<Vec<Subscriber>> {
        self.subscribers.list_by_operator(operator_id).await
    }

    async fn find_subscriber_by_phone(&self, phone: &str) -> Result<Option<Subscriber>> {
        self.subscribers.find_by_phone(phone).await
    }

    async fn insert_subscriber(&self, subscriber: NewSubscriber) -> Result<Subscriber> {
        self.subscribers.create(subscriber).await
    }

    async fn update_subscriber_first_name(&self, id: i64, first_name: &str) -> Result<u64> {
        self.subscribers.update_first_name(id, first_name).await
    }

    async fn update_subscriber_company(&self, id: i64, company_id: i64) -> Result<u64> {
        self.subscribers.update_company(id, company_id).await
    }

    async fn delete_subscriber_by_phone(&self, phone: &str) -> Result<u64> {
        self.subscribers.delete_by_phone(phone).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.companies.list().await
    }

    async fn find_company_by_inn(&self, inn: &str) -> Result<Option<Company>> {
        self.companies.find_by_inn(inn).await
    }

    async fn insert_company(&self, company: NewCompany) -> Result<Company> {
        self.companies.create(company).await
    }

    async fn update_company_name(&self, id: i64, name: &str) -> Result<u64> {
        self.companies.update_name(id, name).await
    }

    async fn delete_company_by_inn(&self, inn: &str) -> Result<u64> {
        self.companies.delete_by_inn(inn).await
    }
}
