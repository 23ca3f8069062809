//! Tests for the simulation engine, wave spawning, and the per-frame systems.

use approx::assert_relative_eq;

use gyre_behavior::states::EnteringState;
use gyre_behavior::{StateRegistry, StepOutcome};
use gyre_core::components::{
    AttackPatternData, BehaviorStateData, Health, RetreatTimerData, Scale, ScaleAnimation,
    WeaponCadence,
};
use gyre_core::config::*;
use gyre_core::enums::*;
use gyre_core::events::TransitionEvent;
use gyre_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::systems::scale_animation;

const DT: f32 = 1.0 / 60.0;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn rusher_group() -> EnemyGroupConfig {
    EnemyGroupConfig {
        entry_path: EntryPathConfig {
            duration: 1.0,
            ..Default::default()
        },
        behavior: BehaviorConfig {
            post_entry: PostEntryBehavior::OrbitThenAttack,
            orbit_duration: 1.0,
            max_attacks: 1,
            ..Default::default()
        },
        attack: Some(AttackConfig {
            pattern: AttackPatternType::SingleRush,
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn stage_of(group: EnemyGroupConfig, start_time: f32) -> StageConfig {
    StageConfig {
        name: String::from("test stage"),
        waves: vec![WaveConfig {
            start_time,
            groups: vec![group],
        }],
    }
}

fn spawn_point(engine: &SimulationEngine) -> Position {
    let center = engine.screen().center();
    Position::new(center.x + 500.0, center.y)
}

fn state_of(engine: &SimulationEngine, entity: hecs::Entity) -> Option<BehaviorState> {
    engine
        .world()
        .get::<&BehaviorStateData>(entity)
        .ok()
        .map(|d| d.current_state)
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    });
    let mut group = rusher_group();
    group.count = 4;
    group.spawn_interval = 0.5;
    group.spread_degrees = 90.0;
    engine_a.load_stage(stage_of(group.clone(), 0.0));
    engine_b.load_stage(stage_of(group, 0.0));

    for _ in 0..600 {
        let snap_a = engine_a.tick(DT);
        let snap_b = engine_b.tick(DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });
    engine_a.load_stage(stage_of(rusher_group(), 0.0));
    engine_b.load_stage(stage_of(rusher_group(), 0.0));

    // Spawn jitter is drawn from the seeded RNG, so the first frame differs.
    let snap_a = engine_a.tick(DT);
    let snap_b = engine_b.tick(DT);
    assert_eq!(snap_a.enemies.len(), 1);
    assert_ne!(
        serde_json::to_string(&snap_a.enemies).unwrap(),
        serde_json::to_string(&snap_b.enemies).unwrap(),
        "Different seeds should produce different spawn points"
    );
}

// ---- Full lifecycle ----

#[test]
fn test_lifecycle_entry_orbit_attack_exit() {
    init_logging();
    let mut engine = SimulationEngine::new(SimConfig {
        trace_transitions: true,
        ..Default::default()
    });
    engine.load_stage(stage_of(rusher_group(), 0.0));

    let mut transitions: Vec<TransitionEvent> = Vec::new();
    let mut removed = 0;
    let mut max_attack_count = 0;
    for _ in 0..600 {
        let snap = engine.tick(DT);
        transitions.extend(snap.transitions.iter().copied());
        removed += snap.removed;
        for enemy in &snap.enemies {
            max_attack_count = max_attack_count.max(enemy.attack_count);
        }
        if removed > 0 {
            break;
        }
    }

    let path: Vec<(BehaviorState, BehaviorState)> =
        transitions.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(
        path,
        vec![
            (BehaviorState::Entering, BehaviorState::Orbiting),
            (BehaviorState::Orbiting, BehaviorState::Attacking),
            (BehaviorState::Attacking, BehaviorState::Retreating),
        ]
    );
    assert!(transitions.iter().all(|e| !e.forced));
    assert_eq!(max_attack_count, 1);
    assert_eq!(removed, 1, "Exiting enemy should be cleaned up off-screen");
    assert_eq!(engine.world().query::<&BehaviorStateData>().iter().count(), 0);
    assert!(engine.schedule().is_finished());
}

#[test]
fn test_entry_time_recorded_on_transition() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.load_stage(stage_of(rusher_group(), 0.0));

    let mut first = None;
    for _ in 0..120 {
        let snap = engine.tick(DT);
        if let Some(event) = snap.transitions.first() {
            first = Some(*event);
            break;
        }
    }
    let event = first.expect("entry should complete within two seconds");
    assert_eq!(event.to, BehaviorState::Orbiting);
    assert!(event.time_in_state >= 1.0 - DT && event.time_in_state <= 1.0 + 2.0 * DT);
}

#[test]
fn test_entry_ends_on_orbit_ring() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut group = rusher_group();
    group.behavior.post_entry = PostEntryBehavior::OrbitOnly;
    let entity = engine.spawn_enemy(&group, spawn_point(&engine));

    for _ in 0..90 {
        engine.tick(DT);
    }
    assert_eq!(state_of(&engine, entity), Some(BehaviorState::Orbiting));
    let screen = engine.screen();
    let pos = *engine.world().get::<&Position>(entity).unwrap();
    assert_relative_eq!(
        pos.distance_to(&screen.center()),
        screen.orbit_ring_radius(),
        epsilon = 0.5
    );
}

#[test]
fn test_suicide_dive_through_engine() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let group = EnemyGroupConfig {
        entry_path: EntryPathConfig {
            duration: 0.0,
            ..Default::default()
        },
        behavior: BehaviorConfig {
            post_entry: PostEntryBehavior::ImmediateAttack,
            ..Default::default()
        },
        attack: Some(AttackConfig {
            pattern: AttackPatternType::SuicideDive,
            ..Default::default()
        }),
        ..Default::default()
    };
    let entity = engine.spawn_enemy(&group, spawn_point(&engine));

    let snap = engine.tick(DT);
    assert_eq!(snap.transitions.len(), 1);
    assert_eq!(snap.transitions[0].to, BehaviorState::Attacking);

    let mut impact = None;
    for _ in 0..120 {
        let snap = engine.tick(DT);
        if let Some(event) = snap.transitions.first() {
            impact = Some(*event);
            break;
        }
    }
    let impact = impact.expect("dive should reach the center");
    assert_eq!(impact.from, BehaviorState::Attacking);
    assert_eq!(impact.to, BehaviorState::Retreating);

    let data = (*engine.world().get::<&BehaviorStateData>(entity).unwrap()).clone();
    assert_eq!(data.attack_count, 1);
    assert_eq!(data.previous_state, BehaviorState::Attacking);
}

#[test]
fn test_critical_health_forces_retreat() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let group = EnemyGroupConfig {
        entry_path: EntryPathConfig {
            duration: 0.0,
            ..Default::default()
        },
        behavior: BehaviorConfig {
            post_entry: PostEntryBehavior::OrbitOnly,
            ..Default::default()
        },
        retreat: Some(RetreatConfig::default()),
        ..Default::default()
    };
    let entity = engine.spawn_enemy(&group, spawn_point(&engine));
    engine.tick(DT);
    assert_eq!(state_of(&engine, entity), Some(BehaviorState::Orbiting));

    // An external damage system writes health; the behavior core only reads it.
    engine
        .world_mut()
        .get::<&mut Health>(entity)
        .unwrap()
        .current = 10.0;

    let snap = engine.tick(DT);
    assert_eq!(snap.transitions.len(), 1);
    assert_eq!(snap.transitions[0].to, BehaviorState::Retreating);
    assert_relative_eq!(snap.enemies[0].health_fraction, 0.1);
}

// ---- Spawning ----

#[test]
fn test_spawn_attaches_configured_components() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let fire = FireConfig {
        interval: 0.75,
        burst_count: 3,
        bullet_speed: 400.0,
    };
    let mut group = rusher_group();
    group.fire = Some(fire.clone());
    let armed = engine.spawn_enemy(&group, spawn_point(&engine));

    {
        let cadence = engine.world().get::<&WeaponCadence>(armed).unwrap();
        assert_eq!(cadence.fire, fire);
        assert_relative_eq!(cadence.cooldown_remaining, 0.75);
    }
    assert!(engine.world().get::<&AttackPatternData>(armed).is_ok());
    assert!(engine.world().get::<&RetreatTimerData>(armed).is_err());

    // Sections a group leaves out are not attached at all.
    let unarmed = engine.spawn_enemy(&EnemyGroupConfig::default(), spawn_point(&engine));
    assert!(engine.world().get::<&WeaponCadence>(unarmed).is_err());
    assert!(engine.world().get::<&AttackPatternData>(unarmed).is_err());
}

// ---- Wave schedule ----

#[test]
fn test_schedule_spawns_on_time() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut group = rusher_group();
    group.count = 3;
    group.spawn_interval = 0.5;
    engine.load_stage(stage_of(group, 1.0));
    assert_eq!(engine.schedule().total_enemies(), 3);

    let mut counts = Vec::new();
    for _ in 0..8 {
        let snap = engine.tick(0.25);
        counts.push(snap.enemies.len());
    }
    // elapsed: 0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0
    assert_eq!(counts, vec![0, 0, 0, 1, 1, 2, 2, 3]);
    assert_eq!(engine.schedule().remaining(), 0);
    assert!(engine.schedule().is_finished());
}

#[test]
fn test_schedule_orders_across_waves() {
    let early = EnemyGroupConfig {
        enemy_type: String::from("early"),
        delay: 0.5,
        ..Default::default()
    };
    let late = EnemyGroupConfig {
        enemy_type: String::from("late"),
        ..Default::default()
    };
    let stage = StageConfig {
        name: String::from("two waves"),
        waves: vec![
            WaveConfig {
                start_time: 2.0,
                groups: vec![late],
            },
            WaveConfig {
                start_time: 0.0,
                groups: vec![early],
            },
        ],
    };
    let schedule = crate::systems::wave_spawner::StageSchedule::from_stage(stage);
    let times: Vec<f32> = schedule.entries.iter().map(|e| e.spawn_at).collect();
    assert_eq!(times, vec![0.5, 2.0]);
    assert_eq!(schedule.entries[0].wave, 1);
}

#[test]
fn test_load_stage_json() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let json = r#"{
        "name": "json stage",
        "waves": [
            { "start_time": 0.0, "groups": [ { "count": 2, "spawn_interval": 0.1 } ] }
        ]
    }"#;
    engine.load_stage_json(json).unwrap();
    assert_eq!(engine.schedule().total_enemies(), 2);
    assert_eq!(engine.schedule().stage.name, "json stage");
}

#[test]
fn test_load_stage_json_rejects_bad_input() {
    let mut engine = SimulationEngine::new(SimConfig::default());

    let err = engine.load_stage_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = engine
        .load_stage_json(r#"{ "waves": [ { "groups": [ { "count": 0 } ] } ] }"#)
        .unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "waves[0].groups[0].count"),
        other => panic!("expected Invalid, got {other:?}"),
    }
    // A rejected stage leaves the previous schedule in place.
    assert_eq!(engine.schedule().total_enemies(), 0);
}

// ---- Cancellation ----

#[test]
fn test_cancelled_tick_is_skipped() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.load_stage(stage_of(rusher_group(), 0.0));
    let first = engine.tick(DT);
    assert_eq!(first.frame, 1);

    let token = engine.cancel_token();
    token.cancel();
    let skipped = engine.tick(DT);
    assert!(skipped.skipped);
    assert_eq!(skipped.frame, 1);
    assert!(skipped.transitions.is_empty());
    assert_eq!(
        serde_json::to_string(&skipped.enemies).unwrap(),
        serde_json::to_string(&first.enemies).unwrap(),
        "A skipped frame must not move anything"
    );
    assert_relative_eq!(engine.elapsed(), DT);

    token.reset();
    let resumed = engine.tick(DT);
    assert!(!resumed.skipped);
    assert_eq!(resumed.frame, 2);
}

// ---- Forced transitions ----

#[test]
fn test_force_transition_via_engine() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let entity = engine.spawn_enemy(&rusher_group(), spawn_point(&engine));

    let outcome = engine.force_transition(entity, BehaviorState::Hovering);
    assert_eq!(
        outcome,
        Some(StepOutcome::Transitioned {
            from: BehaviorState::Entering,
            to: BehaviorState::Hovering,
        })
    );
    assert_eq!(state_of(&engine, entity), Some(BehaviorState::Hovering));

    // Forced events are delivered with the next snapshot.
    let snap = engine.tick(DT);
    assert_eq!(snap.transitions.len(), 1);
    assert!(snap.transitions[0].forced);
    assert_eq!(snap.transitions[0].to, BehaviorState::Hovering);
}

#[test]
fn test_force_transition_unknown_entity() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let entity = engine.world_mut().spawn((Health::new(10.0),));
    assert_eq!(engine.force_transition(entity, BehaviorState::Orbiting), None);
}

// ---- Registry ----

#[test]
fn test_missing_handler_keeps_enemy_in_place() {
    let mut registry = StateRegistry::new();
    registry.register(EnteringState);
    let mut engine = SimulationEngine::with_registry(SimConfig::default(), registry);

    let mut group = rusher_group();
    group.entry_path.duration = 0.5;
    let entity = engine.spawn_enemy(&group, spawn_point(&engine));

    for _ in 0..60 {
        let snap = engine.tick(DT);
        assert!(snap.transitions.is_empty());
    }
    let data = (*engine.world().get::<&BehaviorStateData>(entity).unwrap()).clone();
    assert_eq!(data.current_state, BehaviorState::Entering);
    assert_eq!(data.previous_state, BehaviorState::Entering);
}

// ---- Cleanup ----

#[test]
fn test_cleanup_removes_offscreen_retreaters_only() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let far = Position::new(-500.0, -500.0);
    let leaving = engine.spawn_enemy(&rusher_group(), far);
    let arriving = engine.spawn_enemy(&rusher_group(), far);
    engine.force_transition(leaving, BehaviorState::Retreating);

    let snap = engine.tick(DT);
    assert_eq!(snap.removed, 1);
    assert!(!engine.world().contains(leaving));
    assert!(engine.world().contains(arriving));
}

// ---- Scale animation ----

#[test]
fn test_scale_animation_advances_and_finishes() {
    let mut anim = ScaleAnimConfig {
        start_scale: 0.0,
        end_scale: 1.0,
        easing: EasingKind::Linear,
    }
    .animation(1.0);
    let mut scale = Scale { value: 0.0 };

    scale_animation::advance(&mut anim, &mut scale, 0.5);
    assert_relative_eq!(scale.value, 0.5);
    assert!(anim.active);

    scale_animation::advance(&mut anim, &mut scale, 0.75);
    assert_relative_eq!(scale.value, 1.0);
    assert!(!anim.active);

    // Inactive animations leave the scale alone.
    scale.value = 3.0;
    scale_animation::advance(&mut anim, &mut scale, 0.1);
    assert_relative_eq!(scale.value, 3.0);
}

#[test]
fn test_scale_animation_zero_duration_snaps() {
    let mut anim = ScaleAnimation {
        start_scale: 2.0,
        end_scale: 1.0,
        easing: EasingKind::EaseOut,
        duration: 0.0,
        elapsed: 0.0,
        active: true,
    };
    let mut scale = Scale { value: 2.0 };
    scale_animation::advance(&mut anim, &mut scale, DT);
    assert_relative_eq!(scale.value, 1.0);
    assert!(!anim.active);
}

#[test]
fn test_spawn_scale_follows_entry() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut group = rusher_group();
    group.scale_anim = ScaleAnimConfig {
        start_scale: 0.0,
        end_scale: 1.0,
        easing: EasingKind::Linear,
    };
    engine.spawn_enemy(&group, spawn_point(&engine));

    let snap = engine.tick(0.5);
    assert_relative_eq!(snap.enemies[0].scale, 0.5, epsilon = 1e-4);
    let snap = engine.tick(0.5);
    assert_relative_eq!(snap.enemies[0].scale, 1.0);
}
