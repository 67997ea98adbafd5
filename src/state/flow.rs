//! Conversation flow states
//!
//! One tagged variant per flow family, with each step carrying exactly the
//! fields captured so far. The session acts as an accumulator across the
//! steps of one flow; a step that needs a field the previous steps did not
//! capture simply cannot be constructed.

/// The flow an operator currently has in progress. Absence of a `FlowState`
/// in the session store means the operator is idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    CreateSubscriber(CreateSubscriberStep),
    SearchSubscriber,
    UpdateSubscriberName(UpdateSubscriberStep),
    DeleteSubscriber,
    AssignToCompany(AssignCompanyStep),
    CreateCompany(CreateCompanyStep),
    UpdateCompanyName(UpdateCompanyStep),
    DeleteCompany,
}

/// Steps of the create-subscriber flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateSubscriberStep {
    AwaitingLastName,
    AwaitingFirstName {
        last_name: String,
    },
    AwaitingPhone {
        last_name: String,
        first_name: String,
    },
    AwaitingAddress {
        last_name: String,
        first_name: String,
        phone: String,
    },
}

/// Steps of the update-subscriber-name flow. The target row id is captured
/// at lookup time and carried through to the commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateSubscriberStep {
    AwaitingPhone,
    AwaitingFirstName { subscriber_id: i64 },
}

/// Steps of the assign-subscriber-to-company flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignCompanyStep {
    AwaitingPhone,
    AwaitingInn { subscriber_id: i64 },
}

/// Steps of the create-company flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateCompanyStep {
    AwaitingName,
    AwaitingCompanyType {
        name: String,
    },
    AwaitingInn {
        name: String,
        company_type: String,
    },
}

/// Steps of the update-company-name flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateCompanyStep {
    AwaitingInn,
    AwaitingName { company_id: i64 },
}
