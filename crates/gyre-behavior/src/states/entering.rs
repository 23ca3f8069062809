//! Entering: fly the configured entry path onto the orbit ring.

use std::f32::consts::{PI, TAU};

use gyre_core::components::EntryPath;
use gyre_core::constants::LOOP_ENTRY_RADIUS;
use gyre_core::enums::{BehaviorState, EasingKind, EntryPathType, PostEntryBehavior};
use gyre_core::types::Position;

use crate::context::BehaviorContext;
use crate::easing::{apply_easing, lerp, lerp_with_easing};
use crate::handler::StateHandler;

pub struct EnteringState;

impl StateHandler for EnteringState {
    fn state_type(&self) -> BehaviorState {
        BehaviorState::Entering
    }

    fn enter(&self, ctx: &mut BehaviorContext<'_>) {
        let center = ctx.center();
        let ring = ctx.screen.orbit_ring_radius();
        let origin = *ctx.position;

        let Some(path) = ctx.entry.as_deref_mut() else {
            return;
        };
        path.origin = origin;
        path.start_angle = origin.angle_from(&center);
        path.start_radius = if path.config.start_radius > 0.0 {
            path.config.start_radius
        } else {
            origin.distance_to(&center)
        };
        path.target_radius = path.config.target_radius.unwrap_or(ring);
        path.progress = 0.0;

        // Spawn-in scale runs for as long as the path does.
        if let Some(anim) = ctx.scale.as_deref_mut() {
            anim.duration = path.config.duration;
            anim.elapsed = 0.0;
            anim.active = true;
        }
    }

    fn update(&self, ctx: &mut BehaviorContext<'_>, dt: f32) {
        let center = ctx.center();
        let Some(path) = ctx.entry.as_deref_mut() else {
            return;
        };
        path.progress = if path.config.duration > 0.0 {
            (path.progress + dt / path.config.duration).min(1.0)
        } else {
            1.0
        };
        *ctx.position = path_position(path, &center);
    }

    fn next_state(&self, ctx: &BehaviorContext<'_>) -> BehaviorState {
        let complete = ctx.entry.as_deref().map_or(true, EntryPath::is_complete);
        if !complete {
            return BehaviorState::Entering;
        }
        match ctx.data.post_entry_behavior {
            PostEntryBehavior::ImmediateAttack => BehaviorState::Attacking,
            PostEntryBehavior::HoverCenterThenOrbit => BehaviorState::Hovering,
            PostEntryBehavior::OrbitOnly | PostEntryBehavior::OrbitThenAttack => {
                BehaviorState::Orbiting
            }
        }
    }
}

/// Position on `path` at its current progress.
pub fn path_position(path: &EntryPath, center: &Position) -> Position {
    let p = path.progress.clamp(0.0, 1.0);
    let dir = path.config.rotation.sign();
    let (r0, r1) = (path.start_radius, path.target_radius);

    match path.config.path_type {
        EntryPathType::SpiralIn => {
            let radius = lerp_with_easing(r0, r1, p, EasingKind::EaseOut);
            let sweep = (path.config.spiral_turns * 360.0 * p).to_radians();
            Position::on_circle(center, radius, path.start_angle + dir * sweep)
        }
        EntryPathType::ArcSweep => {
            let radius = lerp(r0, r1, p);
            let sweep = (path.config.arc_angle * p).to_radians();
            Position::on_circle(center, radius, path.start_angle + dir * sweep)
        }
        EntryPathType::StraightIn => {
            let end = Position::on_circle(center, r1, path.start_angle);
            let t = apply_easing(p, EasingKind::EaseOut);
            Position::from_vec2(path.origin.as_vec2().lerp(end.as_vec2(), t))
        }
        EntryPathType::LoopEntry => {
            let t = apply_easing(p, EasingKind::EaseInOut);
            let radius = lerp(r0, r1, t) + LOOP_ENTRY_RADIUS * (PI * p).sin();
            Position::on_circle(center, radius, path.start_angle + dir * TAU * t)
        }
    }
}
