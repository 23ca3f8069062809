//! Borrowed view of one enemy handed to the state handlers.

use gyre_core::components::*;
use gyre_core::constants::RETREAT_HEALTH_THRESHOLD;
use gyre_core::types::{Position, ScreenConfig};

/// Exclusive, short-lived borrow of an enemy's components for one driver call.
///
/// Optional components are `None` when the entity does not carry them;
/// the conditions they feed are then treated as not applicable.
pub struct BehaviorContext<'a> {
    /// Opaque entity id, used only for tracing.
    pub entity: u64,
    pub data: &'a mut BehaviorStateData,
    pub position: &'a mut Position,
    pub health: Option<&'a Health>,
    pub attack: Option<&'a mut AttackPatternData>,
    pub retreat: Option<&'a mut RetreatTimerData>,
    pub entry: Option<&'a mut EntryPath>,
    pub scale: Option<&'a mut ScaleAnimation>,
    pub screen: &'a ScreenConfig,
}

impl BehaviorContext<'_> {
    pub fn center(&self) -> Position {
        self.screen.center()
    }

    pub fn distance_to_center(&self) -> f32 {
        self.position.distance_to(&self.center())
    }

    /// Health fraction below which the enemy breaks off.
    pub fn retreat_threshold(&self) -> f32 {
        self.retreat
            .as_deref()
            .map_or(RETREAT_HEALTH_THRESHOLD, |t| t.health_threshold)
    }

    pub fn health_critical(&self) -> bool {
        self.health
            .is_some_and(|h| h.fraction() < self.retreat_threshold())
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_some_and(|h| h.current <= 0.0)
    }

    pub fn retreat_timed_out(&self) -> bool {
        self.retreat.as_deref().is_some_and(|t| t.timed_out())
    }

    /// Forced-retreat condition shared by Orbiting and Retreating.
    pub fn should_retreat(&self) -> bool {
        self.retreat_timed_out() || self.health_critical()
    }

    pub fn attacks_exhausted(&self) -> bool {
        self.data.max_attacks > 0 && self.data.attack_count >= self.data.max_attacks
    }
}
