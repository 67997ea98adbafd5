//! Data models module

pub mod company;
pub mod operator;
pub mod subscriber;

pub use company::{Company, NewCompany};
pub use operator::Operator;
pub use subscriber::{NewSubscriber, Subscriber};
