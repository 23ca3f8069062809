//! Scale animation system: eases `Scale` toward its target over a duration.

use hecs::World;

use gyre_behavior::easing::lerp_with_easing;
use gyre_core::components::{Scale, ScaleAnimation};

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (anim, scale)) in world.query_mut::<(&mut ScaleAnimation, &mut Scale)>() {
        advance(anim, scale, dt);
    }
}

/// Step one animation. Finished animations snap to `end_scale` and go inactive.
pub fn advance(anim: &mut ScaleAnimation, scale: &mut Scale, dt: f32) {
    if !anim.active {
        return;
    }
    anim.elapsed += dt;
    let t = if anim.duration > 0.0 {
        anim.elapsed / anim.duration
    } else {
        1.0
    };
    if t >= 1.0 {
        scale.value = anim.end_scale;
        anim.active = false;
    } else {
        scale.value = lerp_with_easing(anim.start_scale, anim.end_scale, t, anim.easing);
    }
}
