//! Simulation engine: the per-frame driver for enemy behavior.
//!
//! `SimulationEngine` owns the hecs ECS world and the state registry, runs
//! all systems in a fixed order, and produces `BehaviorSnapshot`s.
//! Completely headless, so every frame can be driven from tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gyre_behavior::{LogSink, StateRegistry, StepOutcome, TransitionSink};
use gyre_core::config::{ConfigError, EnemyGroupConfig, StageConfig};
use gyre_core::enums::BehaviorState;
use gyre_core::events::TransitionEvent;
use gyre_core::state::BehaviorSnapshot;
use gyre_core::types::{Position, ScreenConfig};

use crate::systems;
use crate::systems::wave_spawner::StageSchedule;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for spawn jitter. Same seed = same simulation.
    pub seed: u64,
    pub screen: ScreenConfig,
    /// Forward every state transition to the `log` facade (target `STATE`).
    pub trace_transitions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            screen: ScreenConfig::default(),
            trace_transitions: false,
        }
    }
}

/// Cooperative cancellation flag, checked once at the start of every tick.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn reset(&self) {
        self.0.store(false, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Collects the frame's transitions and optionally logs them.
struct FrameSink<'a> {
    events: &'a mut Vec<TransitionEvent>,
    trace: bool,
}

impl TransitionSink for FrameSink<'_> {
    fn record(&mut self, event: &TransitionEvent) {
        if self.trace {
            LogSink.record(event);
        }
        self.events.push(*event);
    }
}

/// The simulation engine. Owns the ECS world and all behavior state.
pub struct SimulationEngine {
    world: World,
    registry: StateRegistry,
    screen: ScreenConfig,
    rng: ChaCha8Rng,
    schedule: StageSchedule,
    frame: u64,
    elapsed: f32,
    trace_transitions: bool,
    cancel: CancelToken,
    despawn_buffer: Vec<Entity>,
    transition_events: Vec<TransitionEvent>,
}

impl SimulationEngine {
    /// Create an engine with the five built-in state handlers.
    pub fn new(config: SimConfig) -> Self {
        Self::with_registry(config, StateRegistry::with_default_handlers())
    }

    /// Create an engine with a caller-built registry.
    pub fn with_registry(config: SimConfig, registry: StateRegistry) -> Self {
        Self {
            world: World::new(),
            registry,
            screen: config.screen,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            schedule: StageSchedule::default(),
            frame: 0,
            elapsed: 0.0,
            trace_transitions: config.trace_transitions,
            cancel: CancelToken::new(),
            despawn_buffer: Vec::new(),
            transition_events: Vec::new(),
        }
    }

    /// Replace the spawn timeline with `stage` and restart the stage clock.
    pub fn load_stage(&mut self, stage: StageConfig) {
        log::info!(
            "loading stage '{}': {} waves, {} enemies",
            stage.name,
            stage.waves.len(),
            stage.total_enemies()
        );
        self.schedule = StageSchedule::from_stage(stage);
        self.elapsed = 0.0;
    }

    /// Parse, validate, and load a stage from JSON.
    pub fn load_stage_json(&mut self, json: &str) -> Result<(), ConfigError> {
        let stage = StageConfig::from_json(json)?;
        self.load_stage(stage);
        Ok(())
    }

    /// Spawn a single enemy outside the stage schedule.
    pub fn spawn_enemy(&mut self, group: &EnemyGroupConfig, position: Position) -> Entity {
        world_setup::spawn_enemy(&mut self.world, &self.registry, &self.screen, group, position)
    }

    /// Force an enemy into `target` (scripted events). The transition shows up
    /// in the next snapshot. `None` if the entity has no behavior record.
    pub fn force_transition(&mut self, entity: Entity, target: BehaviorState) -> Option<StepOutcome> {
        let mut sink = FrameSink {
            events: &mut self.transition_events,
            trace: self.trace_transitions,
        };
        systems::behavior::force_transition(
            &mut self.world,
            &self.registry,
            &self.screen,
            entity,
            target,
            &mut sink,
        )
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f32) -> BehaviorSnapshot {
        if self.cancel.is_cancelled() {
            log::debug!("frame {} skipped: cancellation signaled", self.frame);
            let mut snapshot = systems::snapshot::build_snapshot(
                &self.world,
                self.frame,
                self.elapsed,
                Vec::new(),
                0,
            );
            snapshot.skipped = true;
            return snapshot;
        }

        let removed = self.run_systems(dt);
        self.frame += 1;

        let transitions = std::mem::take(&mut self.transition_events);
        systems::snapshot::build_snapshot(&self.world, self.frame, self.elapsed, transitions, removed)
    }

    /// Run all systems in order. Returns the number of enemies removed.
    fn run_systems(&mut self, dt: f32) -> usize {
        self.elapsed += dt;

        // 1. Wave spawning
        systems::wave_spawner::run(
            &mut self.world,
            &self.registry,
            &self.screen,
            &mut self.rng,
            &mut self.schedule,
            self.elapsed,
        );
        // 2. Behavior state machines
        let mut sink = FrameSink {
            events: &mut self.transition_events,
            trace: self.trace_transitions,
        };
        systems::behavior::run(&mut self.world, &self.registry, &self.screen, dt, &mut sink);
        // 3. Spawn-in scale
        systems::scale_animation::run(&mut self.world, dt);
        // 4. Cleanup (retreated off-screen)
        systems::cleanup::run(&mut self.world, &self.screen, &mut self.despawn_buffer)
    }

    /// Handle for signaling cancellation from outside the game loop.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Seconds since the stage was loaded.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn screen(&self) -> ScreenConfig {
        self.screen
    }

    pub fn schedule(&self) -> &StageSchedule {
        &self.schedule
    }

    /// Read-only view of the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for the external systems that share it
    /// (damage, collision). They must not write `BehaviorStateData`.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
