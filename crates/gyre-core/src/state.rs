//! Behavior snapshot: the visible enemy state after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::BehaviorState;
use crate::events::TransitionEvent;
use crate::types::Position;

/// Everything a renderer or debugger needs about the enemies after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BehaviorSnapshot {
    pub frame: u64,
    pub elapsed_secs: f32,
    /// True when the tick was skipped because cancellation was signaled.
    pub skipped: bool,
    pub enemies: Vec<EnemyView>,
    pub transitions: Vec<TransitionEvent>,
    /// Enemies removed this tick after leaving the screen.
    pub removed: usize,
}

/// One enemy as seen from outside the behavior core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub state: BehaviorState,
    pub position: Position,
    pub scale: f32,
    pub attack_count: u32,
    pub health_fraction: f32,
}
