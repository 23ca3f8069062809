//! Fundamental geometric types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{OFF_SCREEN_MARGIN, RETURN_ORBIT_FACTOR};

/// 2D position in screen space (pixels). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_vec2(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Angle (radians) of this position as seen from `center`,
    /// i.e. `atan2(y - cy, x - cx)`.
    pub fn angle_from(&self, center: &Position) -> f32 {
        (self.y - center.y).atan2(self.x - center.x)
    }

    /// Point at `radius` from `center` along `angle` (radians).
    pub fn on_circle(center: &Position, radius: f32, angle: f32) -> Self {
        Self::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

/// Screen geometry, read-only to the behavior core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_SCREEN_WIDTH,
            height: crate::constants::DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl ScreenConfig {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the ring that returning enemies settle onto.
    pub fn orbit_ring_radius(&self) -> f32 {
        RETURN_ORBIT_FACTOR * self.height / 2.0
    }

    /// Whether `pos` lies outside the screen by more than `margin` pixels.
    pub fn is_beyond(&self, pos: &Position, margin: f32) -> bool {
        pos.x < -margin
            || pos.y < -margin
            || pos.x > self.width + margin
            || pos.y > self.height + margin
    }

    /// Off-screen test used by retreat and cleanup.
    pub fn is_off_screen(&self, pos: &Position) -> bool {
        self.is_beyond(pos, OFF_SCREEN_MARGIN)
    }
}
