//! Cleanup system: removes retreating enemies that have left the screen.

use hecs::{Entity, World};

use gyre_core::components::BehaviorStateData;
use gyre_core::enums::BehaviorState;
use gyre_core::types::{Position, ScreenConfig};

/// Despawn enemies that are `Retreating` and beyond the off-screen margin.
/// Uses a caller-owned buffer to avoid per-frame allocation. Returns the
/// number of entities removed.
pub fn run(world: &mut World, screen: &ScreenConfig, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (data, pos)) in world.query_mut::<(&BehaviorStateData, &Position)>() {
        if data.current_state == BehaviorState::Retreating && screen.is_off_screen(pos) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
