//! Test helpers: an in-memory entity store that mirrors the relational
//! store's contract (uniqueness, affected-row counts) so conversation flows
//! can be exercised end to end without a database.

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use SubDesk::conversation::{ConversationController, Reply};
use SubDesk::database::EntityStore;
use SubDesk::models::{Company, NewCompany, NewSubscriber, Operator, Subscriber};
use SubDesk::utils::errors::{Result, SubDeskError};

#[derive(Debug, Default)]
struct MemInner {
    next_id: i64,
    operators: Vec<Operator>,
    subscribers: Vec<Subscriber>,
    companies: Vec<Company>,
}

impl MemInner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory stand-in for the PostgreSQL-backed `DatabaseService`.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    inner: Arc<Mutex<MemInner>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemInner> {
        self.inner.lock().unwrap()
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    pub fn company_count(&self) -> usize {
        self.lock().companies.len()
    }

    pub fn subscriber_by_phone(&self, phone: &str) -> Option<Subscriber> {
        self.lock()
            .subscribers
            .iter()
            .find(|s| s.phone == phone)
            .cloned()
    }

    pub fn company_by_inn(&self, inn: &str) -> Option<Company> {
        self.lock().companies.iter().find(|c| c.inn == inn).cloned()
    }
}

#[async_trait]
impl EntityStore for MemStore {
    async fn get_or_create_operator(&self, telegram_id: i64) -> Result<Operator> {
        let mut inner = self.lock();
        if let Some(operator) = inner.operators.iter().find(|o| o.telegram_id == telegram_id) {
            return Ok(operator.clone());
        }

        let operator = Operator {
            id: inner.next_id(),
            telegram_id,
            display_name: None,
            created_at: Utc::now(),
        };
        inner.operators.push(operator.clone());
        Ok(operator)
    }

    async fn list_subscribers(&self, operator_id: i64) -> Result<Vec<Subscriber>> {
        let inner = self.lock();
        let mut subscribers: Vec<Subscriber> = inner
            .subscribers
            .iter()
            .filter(|s| s.operator_id == operator_id)
            .cloned()
            .collect();
        subscribers.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        Ok(subscribers)
    }

    async fn find_subscriber_by_phone(&self, phone: &str) -> Result<Option<Subscriber>> {
        Ok(self.subscriber_by_phone(phone))
    }

    async fn insert_subscriber(&self, subscriber: NewSubscriber) -> Result<Subscriber> {
        let mut inner = self.lock();
        if inner.subscribers.iter().any(|s| s.phone == subscriber.phone) {
            return Err(SubDeskError::UniqueViolation { field: "phone" });
        }

        let subscriber = Subscriber {
            id: inner.next_id(),
            last_name: subscriber.last_name,
            first_name: subscriber.first_name,
            phone: subscriber.phone,
            address: subscriber.address,
            operator_id: subscriber.operator_id,
            company_id: None,
            created_at: Utc::now(),
        };
        inner.subscribers.push(subscriber.clone());
        Ok(subscriber)
    }

    async fn update_subscriber_first_name(&self, id: i64, first_name: &str) -> Result<u64> {
        let mut inner = self.lock();
        match inner.subscribers.iter_mut().find(|s| s.id == id) {
            Some(subscriber) => {
                subscriber.first_name = first_name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_subscriber_company(&self, id: i64, company_id: i64) -> Result<u64> {
        let mut inner = self.lock();
        match inner.subscribers.iter_mut().find(|s| s.id == id) {
            Some(subscriber) => {
                subscriber.company_id = Some(company_id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_subscriber_by_phone(&self, phone: &str) -> Result<u64> {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|s| s.phone != phone);
        Ok((before - inner.subscribers.len()) as u64)
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        let inner = self.lock();
        let mut companies = inner.companies.clone();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn find_company_by_inn(&self, inn: &str) -> Result<Option<Company>> {
        Ok(self.company_by_inn(inn))
    }

    async fn insert_company(&self, company: NewCompany) -> Result<Company> {
        let mut inner = self.lock();
        if inner.companies.iter().any(|c| c.inn == company.inn) {
            return Err(SubDeskError::UniqueViolation { field: "inn" });
        }

        let company = Company {
            id: inner.next_id(),
            name: company.name,
            company_type: company.company_type,
            inn: company.inn,
            created_at: Utc::now(),
        };
        inner.companies.push(company.clone());
        Ok(company)
    }

    async fn update_company_name(&self, id: i64, name: &str) -> Result<u64> {
        let mut inner = self.lock();
        match inner.companies.iter_mut().find(|c| c.id == id) {
            Some(company) => {
                company.name = name.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_company_by_inn(&self, inn: &str) -> Result<u64> {
        let mut inner = self.lock();
        let before = inner.companies.len();
        inner.companies.retain(|c| c.inn != inn);
        Ok((before - inner.companies.len()) as u64)
    }
}

/// A controller over a fresh in-memory store, plus a handle to the store for
/// post-hoc assertions.
pub fn controller() -> (ConversationController<MemStore>, MemStore) {
    let store = MemStore::new();
    (ConversationController::new(store.clone()), store)
}

/// Feed a sequence of inbound texts to the controller, returning the replies
/// to the final one.
pub async fn drive(
    controller: &ConversationController<MemStore>,
    operator_id: i64,
    inputs: &[&str],
) -> Vec<Reply> {
    let mut last = Vec::new();
    for input in inputs {
        last = controller
            .handle_event(operator_id, input)
            .await
            .expect("event processing failed");
    }
    last
}
