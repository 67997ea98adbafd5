//! Repository implementations

pub mod company;
pub mod operator;
pub mod subscriber;

pub use company::CompanyRepository;
pub use operator::OperatorRepository;
pub use subscriber::SubscriberRepository;
