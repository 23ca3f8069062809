//! ECS components for hecs entities.
//!
//! Components are plain data structs. Behavior logic lives in the
//! state handlers and systems, not here.

use serde::{Deserialize, Serialize};

use crate::config::{EntryPathConfig, FireConfig};
use crate::constants::*;
use crate::enums::*;
use crate::types::Position;

/// Marks an entity as a hostile enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Per-enemy behavior record. Only the behavior system mutates it once seeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorStateData {
    pub current_state: BehaviorState,
    pub previous_state: BehaviorState,
    /// Seconds since entering `current_state`.
    pub state_time: f32,

    /// Degrees per second.
    pub orbit_speed: f32,
    pub orbit_direction: RotationDirection,
    /// Seconds in orbit before an attack becomes possible. 0 disables attacking from orbit.
    pub orbit_duration: f32,
    /// Last orbit angle in degrees; `None` until the orbit is established.
    pub target_orbit_angle: Option<f32>,

    pub post_entry_behavior: PostEntryBehavior,
    /// 0 means unlimited.
    pub max_attacks: u32,
    pub attack_count: u32,

    /// Seconds spent hovering before orbiting.
    pub hover_duration: f32,
}

impl Default for BehaviorStateData {
    fn default() -> Self {
        Self {
            current_state: BehaviorState::Entering,
            previous_state: BehaviorState::Entering,
            state_time: 0.0,
            orbit_speed: DEFAULT_ORBIT_SPEED,
            orbit_direction: RotationDirection::Clockwise,
            orbit_duration: DEFAULT_ORBIT_DURATION,
            target_orbit_angle: None,
            post_entry_behavior: PostEntryBehavior::default(),
            max_attacks: 0,
            attack_count: 0,
            hover_duration: DEFAULT_HOVER_DURATION,
        }
    }
}

/// Attack run parameters, attached to enemies that can attack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPatternData {
    pub pattern_type: AttackPatternType,
    pub target_position: Position,
    /// Where the run started. `None` for suicide dives.
    pub return_position: Option<Position>,
    /// px/s toward the target.
    pub rush_speed: f32,
    /// px/s back onto the orbit ring after the run.
    pub return_speed: f32,
    /// Extra orbit time required between attacks (seconds).
    pub cooldown: f32,
    pub attack_timer: f32,
    /// Optional cap on run length (seconds). 0 disables it.
    pub attack_duration: f32,
    pub is_active: bool,
}

impl Default for AttackPatternData {
    fn default() -> Self {
        Self {
            pattern_type: AttackPatternType::default(),
            target_position: Position::default(),
            return_position: None,
            rush_speed: DEFAULT_RUSH_SPEED,
            return_speed: DEFAULT_RETREAT_SPEED,
            cooldown: 0.0,
            attack_timer: 0.0,
            attack_duration: 0.0,
            is_active: false,
        }
    }
}

/// Retreat bookkeeping, attached to enemies that may be timed out of the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetreatTimerData {
    pub is_retreating: bool,
    /// Outward direction from center (radians).
    pub retreat_angle: f32,
    /// Seconds accumulated while not retreating.
    pub elapsed_time: f32,
    /// Forced retreat once `elapsed_time` reaches this. 0 disables the timeout.
    pub timeout_duration: f32,
    /// px/s; exit runs at `EXIT_SPEED_FACTOR` times this.
    pub retreat_speed: f32,
    /// Health fraction below which the enemy retreats.
    pub health_threshold: f32,
}

impl Default for RetreatTimerData {
    fn default() -> Self {
        Self {
            is_retreating: false,
            retreat_angle: 0.0,
            elapsed_time: 0.0,
            timeout_duration: 0.0,
            retreat_speed: DEFAULT_RETREAT_SPEED,
            health_threshold: RETREAT_HEALTH_THRESHOLD,
        }
    }
}

impl RetreatTimerData {
    /// Whether the stage timeout has run out for this enemy.
    pub fn timed_out(&self) -> bool {
        self.timeout_duration > 0.0 && self.elapsed_time >= self.timeout_duration
    }
}

/// Hit points, shared with collision and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(maximum: f32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Remaining fraction of maximum health. A non-positive maximum reads as empty.
    pub fn fraction(&self) -> f32 {
        if self.maximum <= 0.0 {
            0.0
        } else {
            self.current / self.maximum
        }
    }
}

/// Entry flight state: the configured path plus where it started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryPath {
    pub config: EntryPathConfig,
    pub origin: Position,
    /// Origin bearing from center (radians).
    pub start_angle: f32,
    pub start_radius: f32,
    /// Orbit ring radius the path ends on.
    pub target_radius: f32,
    /// 0.0 at spawn, 1.0 when the path is complete.
    pub progress: f32,
}

impl EntryPath {
    pub fn new(config: EntryPathConfig) -> Self {
        Self {
            config,
            origin: Position::default(),
            start_angle: 0.0,
            start_radius: 0.0,
            target_radius: 0.0,
            progress: 0.0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Visual scale factor read by rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub value: f32,
}

/// Eased interpolation of `Scale` over a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleAnimation {
    pub start_scale: f32,
    pub end_scale: f32,
    pub easing: EasingKind,
    pub duration: f32,
    pub elapsed: f32,
    pub active: bool,
}

/// Weapon cadence, consumed by the weapon system only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponCadence {
    pub fire: FireConfig,
    pub cooldown_remaining: f32,
}
