//! Events emitted by the behavior core for tracing and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::BehaviorState;

/// Log category for state transitions.
pub const STATE_CATEGORY: &str = "STATE";

/// A state transition that was applied to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionEvent {
    /// Opaque entity id (ECS entity bits).
    pub entity: u64,
    pub from: BehaviorState,
    pub to: BehaviorState,
    /// Time spent in `from` before leaving it (seconds).
    pub time_in_state: f32,
    /// Whether the transition came from an external `force_transition`.
    pub forced: bool,
}
