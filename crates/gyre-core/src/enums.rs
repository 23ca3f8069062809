//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behavior state of an enemy. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorState {
    /// Flying the configured entry path onto the screen.
    #[default]
    Entering,
    /// Circling the screen center.
    Orbiting,
    /// Executing one attack run.
    Attacking,
    /// Returning to the orbit ring or leaving the play field.
    Retreating,
    /// Holding near the screen center (bosses).
    Hovering,
}

impl BehaviorState {
    pub const ALL: [BehaviorState; 5] = [
        BehaviorState::Entering,
        BehaviorState::Orbiting,
        BehaviorState::Attacking,
        BehaviorState::Retreating,
        BehaviorState::Hovering,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BehaviorState::Entering => "Entering",
            BehaviorState::Orbiting => "Orbiting",
            BehaviorState::Attacking => "Attacking",
            BehaviorState::Retreating => "Retreating",
            BehaviorState::Hovering => "Hovering",
        }
    }
}

/// What an enemy does once its entry path completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostEntryBehavior {
    /// Circle forever; only a retreat condition ends the orbit.
    OrbitOnly,
    /// Circle for the orbit duration, then attack.
    #[default]
    OrbitThenAttack,
    /// Attack as soon as the entry path completes.
    ImmediateAttack,
    /// Hover near the center, then orbit.
    HoverCenterThenOrbit,
}

/// Attack run shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackPatternType {
    #[default]
    SingleRush,
    PairedRush,
    LoopbackRush,
    /// Dives into the center with no return point.
    SuicideDive,
}

/// Entry path shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryPathType {
    #[default]
    SpiralIn,
    ArcSweep,
    StraightIn,
    LoopEntry,
}

/// Easing curve applied to a normalized progress value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

/// Rotation sense. Screen y grows down, so a positive angle step is clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// +1 for clockwise, -1 for counter-clockwise.
    pub fn sign(&self) -> f32 {
        match self {
            RotationDirection::Clockwise => 1.0,
            RotationDirection::CounterClockwise => -1.0,
        }
    }
}
