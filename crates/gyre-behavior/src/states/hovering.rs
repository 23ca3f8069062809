//! Hovering: hold just above the screen center, then start orbiting.

use gyre_core::constants::{HOVER_APPROACH_RATE, HOVER_OFFSET};
use gyre_core::enums::BehaviorState;
use gyre_core::types::{Position, ScreenConfig};

use crate::context::BehaviorContext;
use crate::handler::StateHandler;

pub struct HoveringState;

/// Point the enemy settles on while hovering.
pub fn hover_point(screen: &ScreenConfig) -> Position {
    let center = screen.center();
    Position::new(center.x, center.y - HOVER_OFFSET)
}

impl StateHandler for HoveringState {
    fn state_type(&self) -> BehaviorState {
        BehaviorState::Hovering
    }

    fn enter(&self, ctx: &mut BehaviorContext<'_>) {
        // The orbit that follows starts from wherever the hover ends.
        ctx.data.target_orbit_angle = None;
    }

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32) {
        let target = hover_point(ctx.screen).as_vec2();
        let current = ctx.position.as_vec2();
        let blend = 1.0 - (-HOVER_APPROACH_RATE * dt).exp();
        *ctx.position = Position::from_vec2(current + (target - current) * blend);
    }

    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState {
        if ctx.data.state_time >= ctx.data.hover_duration {
            BehaviorState::Orbiting
        } else {
            BehaviorState::Hovering
        }
    }
}
