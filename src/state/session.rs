//! Per-operator session storage
//!
//! A process-wide ephemeral map from operator id to the flow in progress.
//! This is explicitly not the persistence engine: losing it mid-flow loses
//! only uncommitted form data, never committed entities. Each operator has
//! exactly one slot; starting a new flow silently replaces the old one.
//!
//! The lock is never held across an await point. Events for one operator are
//! serialized by the dispatch layer, so a slot is never mutated while a
//! repository call for the same operator is outstanding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

use super::flow::FlowState;

#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    slots: Arc<Mutex<HashMap<i64, FlowState>>>,
}

impl SessionStore {
    /// Create an empty store. Sessions never survive a restart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The flow currently in progress for an operator, if any.
    pub fn get(&self, operator_id: i64) -> Option<FlowState> {
        self.lock().get(&operator_id).cloned()
    }

    /// Replace the operator's flow slot.
    pub fn set(&self, operator_id: i64, state: FlowState) {
        debug!(operator_id, state = ?state, "Session state set");
        self.lock().insert(operator_id, state);
    }

    /// Remove the operator's slot entirely, returning to idle. Clearing is
    /// atomic: no partial field values leak into a later flow.
    pub fn clear(&self, operator_id: i64) {
        if self.lock().remove(&operator_id).is_some() {
            debug!(operator_id, "Session cleared");
        }
    }

    /// Whether the operator has no flow in progress.
    pub fn is_idle(&self, operator_id: i64) -> bool {
        !self.lock().contains_key(&operator_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<i64, FlowState>> {
        // A poisoned lock only means another event panicked mid-update;
        // the map itself is still usable.
        self.slots.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::flow::CreateSubscriberStep;

    #[test]
    fn test_absent_entry_means_idle() {
        let store = SessionStore::new();
        assert!(store.is_idle(1));
        assert_eq!(store.get(1), None);
    }

    #[test]
    fn test_set_get_clear() {
        let store = SessionStore::new();
        store.set(1, FlowState::SearchSubscriber);
        assert_eq!(store.get(1), Some(FlowState::SearchSubscriber));

        store.clear(1);
        assert!(store.is_idle(1));
    }

    #[test]
    fn test_new_flow_replaces_old_one() {
        let store = SessionStore::new();
        store.set(1, FlowState::SearchSubscriber);
        store.set(
            1,
            FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingLastName),
        );

        assert_eq!(
            store.get(1),
            Some(FlowState::CreateSubscriber(
                CreateSubscriberStep::AwaitingLastName
            ))
        );
    }

    #[test]
    fn test_operators_are_isolated() {
        let store = SessionStore::new();
        store.set(
            1,
            FlowState::CreateSubscriber(CreateSubscriberStep::AwaitingFirstName {
                last_name: "Иванов".to_string(),
            }),
        );
        store.set(2, FlowState::DeleteSubscriber);

        store.clear(1);

        assert!(store.is_idle(1));
        assert_eq!(store.get(2), Some(FlowState::DeleteSubscriber));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new();
        store.clear(42);
        assert!(store.is_idle(42));
    }
}
