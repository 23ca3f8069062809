//! Easing curves and interpolation helpers.

use gyre_core::enums::EasingKind;

/// Remap `progress` along the curve `kind`. Input is clamped to `[0, 1]`.
pub fn apply_easing(progress: f32, kind: EasingKind) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    match kind {
        EasingKind::Linear => t,
        EasingKind::EaseIn => t * t,
        EasingKind::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        EasingKind::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        EasingKind::CubicIn => t * t * t,
        EasingKind::CubicOut => 1.0 - (1.0 - t).powi(3),
        EasingKind::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn lerp_with_easing(a: f32, b: f32, t: f32, kind: EasingKind) -> f32 {
    lerp(a, b, apply_easing(t, kind))
}
