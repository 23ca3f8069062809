//! Behavior system: drives every enemy's state machine once per frame.
//!
//! The system is the only writer of `BehaviorStateData`. Each enemy's
//! components are lent to the driver for exactly one call.

use hecs::{Entity, World};

use gyre_behavior::{BehaviorContext, StateRegistry, StepOutcome, TransitionSink};
use gyre_core::components::*;
use gyre_core::enums::BehaviorState;
use gyre_core::types::{Position, ScreenConfig};

/// Opaque id used in transition events.
pub fn entity_id(entity: Entity) -> u64 {
    entity.to_bits().get()
}

/// Advance every enemy carrying `BehaviorStateData` by `dt` seconds.
pub fn run(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    dt: f32,
    sink: &mut dyn TransitionSink,
) {
    for (entity, (data, position, health, attack, retreat, entry, scale)) in world.query_mut::<(
        &mut BehaviorStateData,
        &mut Position,
        Option<&Health>,
        Option<&mut AttackPatternData>,
        Option<&mut RetreatTimerData>,
        Option<&mut EntryPath>,
        Option<&mut ScaleAnimation>,
    )>() {
        let mut ctx = BehaviorContext {
            entity: entity_id(entity),
            data,
            position,
            health,
            attack,
            retreat,
            entry,
            scale,
            screen,
        };
        gyre_behavior::step(registry, &mut ctx, dt, sink);
    }
}

/// What to do with a single enemy outside the frame loop.
enum Action {
    EnterInitial,
    Force(BehaviorState),
}

fn apply(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    entity: Entity,
    action: Action,
    sink: &mut dyn TransitionSink,
) -> Option<StepOutcome> {
    let (data, position, health, attack, retreat, entry, scale) = world
        .query_one_mut::<(
            &mut BehaviorStateData,
            &mut Position,
            Option<&Health>,
            Option<&mut AttackPatternData>,
            Option<&mut RetreatTimerData>,
            Option<&mut EntryPath>,
            Option<&mut ScaleAnimation>,
        )>(entity)
        .ok()?;
    let mut ctx = BehaviorContext {
        entity: entity_id(entity),
        data,
        position,
        health,
        attack,
        retreat,
        entry,
        scale,
        screen,
    };
    Some(match action {
        Action::EnterInitial => gyre_behavior::enter_initial(registry, &mut ctx),
        Action::Force(target) => gyre_behavior::force_transition(registry, &mut ctx, target, sink),
    })
}

/// Force `entity` into `target`. `None` if the entity has no behavior record.
pub fn force_transition(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    entity: Entity,
    target: BehaviorState,
    sink: &mut dyn TransitionSink,
) -> Option<StepOutcome> {
    apply(world, registry, screen, entity, Action::Force(target), sink)
}

/// Run the seeded state's `enter` on a freshly spawned enemy.
pub fn enter_initial(
    world: &mut World,
    registry: &StateRegistry,
    screen: &ScreenConfig,
    entity: Entity,
) -> Option<StepOutcome> {
    let mut sink = gyre_behavior::NullSink;
    apply(world, registry, screen, entity, Action::EnterInitial, &mut sink)
}
