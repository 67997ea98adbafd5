//! Conversation state management

pub mod flow;
pub mod session;

pub use flow::{
    AssignCompanyStep, CreateCompanyStep, CreateSubscriberStep, FlowState, UpdateCompanyStep,
    UpdateSubscriberStep,
};
pub use session::SessionStore;
