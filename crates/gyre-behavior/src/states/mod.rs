//! The five behavior state handlers and their shared geometry.

mod attacking;
mod entering;
mod hovering;
mod orbiting;
mod retreating;

pub use attacking::AttackingState;
pub use entering::{path_position, EnteringState};
pub use hovering::{hover_point, HoveringState};
pub use orbiting::OrbitingState;
pub use retreating::{should_return_to_orbit, RetreatingState};

use glam::Vec2;
use gyre_core::constants::CENTER_EPSILON;
use gyre_core::types::Position;

/// Step from `from` toward `to` by at most `max_step`, never overshooting.
pub fn move_toward(from: Position, to: Position, max_step: f32) -> Position {
    let delta = to.as_vec2() - from.as_vec2();
    let distance = delta.length();
    if distance <= max_step || distance <= f32::EPSILON {
        return to;
    }
    Position::from_vec2(from.as_vec2() + delta / distance * max_step)
}

/// Unit vector pointing from `center` to `pos`. Within `CENTER_EPSILON` of
/// the center the direction is undefined, so `fallback_angle` (radians) is used.
pub fn outward_direction(pos: &Position, center: &Position, fallback_angle: f32) -> Vec2 {
    let offset = pos.as_vec2() - center.as_vec2();
    let radius = offset.length();
    if radius < CENTER_EPSILON {
        Vec2::new(fallback_angle.cos(), fallback_angle.sin())
    } else {
        offset / radius
    }
}
