//! Retreating: fall back onto the orbit ring, or leave the play field.

use gyre_core::constants::*;
use gyre_core::enums::BehaviorState;
use gyre_core::types::Position;

use crate::context::BehaviorContext;
use crate::handler::StateHandler;
use crate::states::outward_direction;

pub struct RetreatingState;

/// Whether a retreating enemy rejoins the orbit (`true`) or exits (`false`).
///
/// Evaluated fresh every frame.
pub fn should_return_to_orbit(ctx: &BehaviorContext<'_>) -> bool {
    !(ctx.attacks_exhausted() || ctx.is_dead() || ctx.health_critical() || ctx.retreat_timed_out())
}

impl StateHandler for RetreatingState {
    fn state_type(&self) -> BehaviorState {
        BehaviorState::Retreating
    }

    fn enter(&self, ctx: &mut BehaviorContext<'_>) {
        let angle = ctx.position.angle_from(&ctx.center());
        if let Some(timer) = ctx.retreat.as_deref_mut() {
            timer.is_retreating = true;
            timer.retreat_angle = angle;
        }
    }

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32) {
        let center = ctx.center();
        let fallback_angle = ctx.retreat.as_deref().map_or(0.0, |t| t.retreat_angle);
        let direction = outward_direction(&*ctx.position, &center, fallback_angle);
        let retreat_speed = ctx
            .retreat
            .as_deref()
            .map_or(DEFAULT_RETREAT_SPEED, |t| t.retreat_speed);

        if should_return_to_orbit(ctx) {
            // The pattern's return speed only covers enemies without a retreat timer.
            let speed = match (ctx.retreat.as_deref(), ctx.attack.as_deref()) {
                (None, Some(attack)) => attack.return_speed,
                _ => retreat_speed,
            };
            let radius = ctx.position.distance_to(&center);
            let gap = ctx.screen.orbit_ring_radius() - radius;
            let step = (speed * dt).min(gap.abs()) * gap.signum();
            *ctx.position = Position::from_vec2(center.as_vec2() + direction * (radius + step));
        } else {
            let speed = retreat_speed * EXIT_SPEED_FACTOR;
            *ctx.position = Position::from_vec2(ctx.position.as_vec2() + direction * speed * dt);
        }
    }

    fn exit(&self, ctx: &mut BehaviorContext<'_>) {
        if let Some(timer) = ctx.retreat.as_deref_mut() {
            timer.is_retreating = false;
        }
    }

    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState {
        // Off-screen enemies wait here for the cleanup system.
        if ctx.screen.is_off_screen(&*ctx.position) {
            return BehaviorState::Retreating;
        }
        if should_return_to_orbit(ctx) {
            let gap = (ctx.distance_to_center() - ctx.screen.orbit_ring_radius()).abs();
            if gap <= ORBIT_REJOIN_TOLERANCE {
                return BehaviorState::Orbiting;
            }
        }
        BehaviorState::Retreating
    }
}
