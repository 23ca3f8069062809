//! Orbiting: circle the screen center until it is time to attack or leave.

use gyre_core::enums::{BehaviorState, PostEntryBehavior};
use gyre_core::types::Position;

use crate::context::BehaviorContext;
use crate::handler::StateHandler;

pub struct OrbitingState;

impl OrbitingState {
    /// Whether the orbit has lasted its configured duration.
    fn orbit_elapsed(ctx: &BehaviorContext<'_>) -> bool {
        ctx.data.orbit_duration > 0.0 && ctx.data.state_time >= ctx.data.orbit_duration
    }

    /// Whether an attack pattern is attached and its cooldown has passed.
    /// The cooldown only applies after the first attack.
    fn attack_ready(ctx: &BehaviorContext<'_>) -> bool {
        let Some(attack) = ctx.attack.as_deref() else {
            return false;
        };
        let data = &*ctx.data;
        let cooldown = if data.attack_count > 0 {
            attack.cooldown
        } else {
            0.0
        };
        data.state_time >= data.orbit_duration + cooldown
    }

    fn retreat_or_stay(ctx: &BehaviorContext<'_>) -> BehaviorState {
        if ctx.should_retreat() {
            BehaviorState::Retreating
        } else {
            BehaviorState::Orbiting
        }
    }
}

impl StateHandler for OrbitingState {
    fn state_type(&self) -> BehaviorState {
        BehaviorState::Orbiting
    }

    fn enter(&self, ctx: &mut BehaviorContext<'_>) {
        if ctx.data.target_orbit_angle.is_none() {
            let angle = ctx.position.angle_from(&ctx.center());
            ctx.data.target_orbit_angle = Some(angle.to_degrees());
        }
    }

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32) {
        let center = ctx.center();
        let radius = ctx.position.distance_to(&center);
        let angle = ctx.position.angle_from(&center);

        let step = (ctx.data.orbit_speed * dt).to_radians() * ctx.data.orbit_direction.sign();
        let new_angle = angle + step;

        *ctx.position = Position::on_circle(&center, radius, new_angle);
        ctx.data.target_orbit_angle = Some(new_angle.to_degrees());
    }

    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState {
        if ctx.data.post_entry_behavior == PostEntryBehavior::OrbitOnly {
            return Self::retreat_or_stay(ctx);
        }
        if Self::orbit_elapsed(ctx) {
            if ctx.attacks_exhausted() {
                return BehaviorState::Retreating;
            }
            if Self::attack_ready(ctx) {
                return BehaviorState::Attacking;
            }
        }
        Self::retreat_or_stay(ctx)
    }
}
