//! Wave spawning system: spawns stage enemies at their scheduled times.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gyre_behavior::StateRegistry;
use gyre_core::config::{EnemyGroupConfig, StageConfig};
use gyre_core::constants::SPAWN_ANGLE_JITTER;
use gyre_core::types::{Position, ScreenConfig};

use crate::world_setup;

/// One enemy waiting to be spawned.
#[derive(Debug, Clone)]
pub struct SpawnEntry {
    /// Seconds after stage start.
    pub spawn_at: f32,
    pub wave: usize,
    pub group: usize,
    /// Position of this enemy within its group.
    pub index: u32,
    pub spawned: bool,
}

/// The complete spawn timeline for a stage.
#[derive(Debug, Clone, Default)]
pub struct StageSchedule {
    pub stage: StageConfig,
    pub entries: Vec<SpawnEntry>,
}

impl StageSchedule {
    /// Expand every group of every wave into timed spawn entries.
    pub fn from_stage(stage: StageConfig) -> Self {
        let mut entries = Vec::new();
        for (wi, wave) in stage.waves.iter().enumerate() {
            for (gi, group) in wave.groups.iter().enumerate() {
                for index in 0..group.count {
                    entries.push(SpawnEntry {
                        spawn_at: wave.start_time + group.delay + index as f32 * group.spawn_interval,
                        wave: wi,
                        group: gi,
                        index,
                        spawned: false,
                    });
                }
            }
        }
        entries.sort_by(|a, b| a.spawn_at.total_cmp(&b.spawn_at));
        Self { stage, entries }
    }

    pub fn total_enemies(&self) -> usize {
        self.entries.len()
    }

    pub fn remaining(&self) -> usize {
        self.entries.iter().filter(|e| !e.spawned).count()
    }

    pub fn is_finished(&self) -> bool {
        self.entries.iter().all(|e| e.spawned)
    }

    fn group(&self, entry: &SpawnEntry) -> Option<&EnemyGroupConfig> {
        self.stage.waves.get(entry.wave)?.groups.get(entry.group)
    }
}

/// Spawn point on the group's ring, fanned out by index with a little jitter.
pub fn spawn_position(
    group: &EnemyGroupConfig,
    index: u32,
    screen: &ScreenConfig,
    rng: &mut ChaCha8Rng,
) -> Position {
    let jitter: f32 = rng.gen_range(-SPAWN_ANGLE_JITTER..=SPAWN_ANGLE_JITTER);
    let angle = group.spawn_angle + index as f32 * group.spread_degrees + jitter;
    Position::on_circle(&screen.center(), group.spawn_radius, angle.to_radians())
}

/// Spawn every entry that is due at `elapsed` seconds.
pub fn run(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    rng: &mut ChaCha8Rng,
    schedule: &mut StageSchedule,
    elapsed: f32,
) {
    for i in 0..schedule.entries.len() {
        let entry = &schedule.entries[i];
        if entry.spawned || entry.spawn_at > elapsed {
            continue;
        }
        let index = entry.index;
        if let Some(group) = schedule.group(entry) {
            let position = spawn_position(group, index, screen, rng);
            world_setup::spawn_enemy(world, registry, screen, group, position);
        }
        schedule.entries[i].spawned = true;
    }
}
