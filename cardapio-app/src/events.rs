//! State change notifications

use std::sync::Arc;

use crate::core::RestaurantState;

/// Published after every state assignment
///
/// `revision` increases by one per assignment, so a subscriber can tell when
/// it lagged behind and skipped intermediate states.
#[derive(Debug, Clone)]
pub struct StateChange {
    pub revision: u64,
    pub state: Arc<RestaurantState>,
}
