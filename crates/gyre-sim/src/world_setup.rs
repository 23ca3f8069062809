//! Entity spawn factories.
//!
//! Builds enemy component bundles from a group configuration. Only the
//! sections a group configures are attached; the behavior core treats a
//! missing component as "not applicable".

use hecs::{Entity, EntityBuilder, World};

use gyre_behavior::StateRegistry;
use gyre_core::components::*;
use gyre_core::config::EnemyGroupConfig;
use gyre_core::types::{Position, ScreenConfig};

use crate::systems::behavior;

/// Spawn one enemy at `position`, seeded from `group`, and run its first `enter`.
pub fn spawn_enemy(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    group: &EnemyGroupConfig,
    position: Position,
) -> Entity {
    let mut builder = EntityBuilder::new();
    builder
        .add(Enemy)
        .add(position)
        .add(Health::new(group.health))
        .add(group.behavior.seed_state())
        .add(EntryPath::new(group.entry_path.clone()))
        .add(Scale {
            value: group.scale_anim.start_scale,
        })
        .add(group.scale_anim.animation(group.entry_path.duration));

    if let Some(attack) = &group.attack {
        builder.add(attack.seed_pattern());
    }
    if let Some(retreat) = &group.retreat {
        builder.add(retreat.seed_timer());
    }
    if let Some(fire) = &group.fire {
        builder.add(WeaponCadence {
            fire: fire.clone(),
            cooldown_remaining: fire.interval,
        });
    }

    let entity = world.spawn(builder.build());
    behavior::enter_initial(world, registry, screen, entity);

    log::debug!(
        "spawned {} {:?} at ({:.0}, {:.0})",
        group.enemy_type,
        entity,
        position.x,
        position.y
    );
    entity
}
