//! Snapshot system: reads the world into a serializable `BehaviorSnapshot`.

use hecs::World;

use gyre_core::components::{BehaviorStateData, Enemy, Health, Scale};
use gyre_core::events::TransitionEvent;
use gyre_core::state::{BehaviorSnapshot, EnemyView};
use gyre_core::types::Position;

use crate::systems::behavior::entity_id;

pub fn build_snapshot(
    world: &World,
    frame: u64,
    elapsed_secs: f32,
    transitions: Vec<TransitionEvent>,
    removed: usize,
) -> BehaviorSnapshot {
    let mut enemies: Vec<EnemyView> = Vec::new();

    let mut query = world.query::<(
        &Enemy,
        &BehaviorStateData,
        &Position,
        Option<&Scale>,
        Option<&Health>,
    )>();
    for (entity, (_enemy, data, pos, scale, health)) in query.iter() {
        enemies.push(EnemyView {
            id: entity_id(entity),
            state: data.current_state,
            position: *pos,
            scale: scale.map_or(1.0, |s| s.value),
            attack_count: data.attack_count,
            health_fraction: health.map_or(1.0, |h| h.fraction()),
        });
    }
    enemies.sort_by_key(|e| e.id);

    BehaviorSnapshot {
        frame,
        elapsed_secs,
        skipped: false,
        enemies,
        transitions,
        removed,
    }
}
