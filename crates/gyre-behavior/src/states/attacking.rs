//! Attacking: one rush toward the screen center.

use gyre_core::constants::*;
use gyre_core::enums::{AttackPatternType, BehaviorState};

use crate::context::BehaviorContext;
use crate::handler::StateHandler;
use crate::states::move_toward;

pub struct AttackingState;

impl StateHandler for AttackingState {
    fn state_type(&self) -> BehaviorState {
        BehaviorState::Attacking
    }

    fn enter(&self, ctx: &mut BehaviorContext<'_>) {
        ctx.data.attack_count += 1;

        let center = ctx.center();
        let start = *ctx.position;
        if let Some(attack) = ctx.attack.as_deref_mut() {
            attack.attack_timer = 0.0;
            attack.is_active = true;
            attack.target_position = center;
            attack.return_position = match attack.pattern_type {
                AttackPatternType::SuicideDive => None,
                AttackPatternType::SingleRush
                | AttackPatternType::PairedRush
                | AttackPatternType::LoopbackRush => Some(start),
            };
        }
    }

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32) {
        let Some(attack) = ctx.attack.as_deref_mut() else {
            return;
        };
        attack.attack_timer += dt;
        *ctx.position = move_toward(*ctx.position, attack.target_position, attack.rush_speed * dt);
    }

    fn exit(&self, ctx: &mut BehaviorContext<'_>) {
        if let Some(attack) = ctx.attack.as_deref_mut() {
            attack.is_active = false;
        }
    }

    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState {
        // Nothing to fly without a pattern.
        let Some(attack) = ctx.attack.as_deref() else {
            return BehaviorState::Retreating;
        };

        if attack.attack_timer >= ATTACK_TIMEOUT_SECS {
            return BehaviorState::Retreating;
        }
        if attack.attack_duration > 0.0 && attack.attack_timer >= attack.attack_duration {
            return BehaviorState::Retreating;
        }

        let to_target = ctx.position.distance_to(&attack.target_position);
        let arrived = match attack.pattern_type {
            AttackPatternType::SuicideDive => ctx.distance_to_center() < SUICIDE_IMPACT_DISTANCE,
            AttackPatternType::SingleRush | AttackPatternType::PairedRush => {
                to_target < RUSH_ARRIVAL_DISTANCE
            }
            AttackPatternType::LoopbackRush => to_target < LOOPBACK_ARRIVAL_DISTANCE,
        };
        if arrived {
            BehaviorState::Retreating
        } else {
            BehaviorState::Attacking
        }
    }
}
