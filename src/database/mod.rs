//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod service;
pub mod store;

// Re-export commonly used database components
pub use connection::{create_pool, run_migrations, DatabaseConfig, DatabasePool};
pub use repositories::{CompanyRepository, OperatorRepository, SubscriberRepository};
pub use service::DatabaseService;
pub use store::EntityStore;
