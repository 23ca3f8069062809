//! Per-entity driver: advance the state clock, update, and transition.

use gyre_core::enums::BehaviorState;
use gyre_core::events::TransitionEvent;

use crate::context::BehaviorContext;
use crate::registry::StateRegistry;
use crate::trace::TransitionSink;

/// What happened to one enemy during a driver call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No handler for the current state; nothing was touched.
    Skipped,
    /// Updated and stayed in the current state.
    Stayed,
    Transitioned {
        from: BehaviorState,
        to: BehaviorState,
    },
    /// The target state has no handler; the enemy stayed where it was.
    Rejected {
        from: BehaviorState,
        to: BehaviorState,
    },
}

/// Run one frame of the state machine for one enemy.
pub fn step(
    registry: &StateRegistry,
    ctx: &mut BehaviorContext<'_>,
    dt: f32,
    sink: &mut dyn TransitionSink,
) -> StepOutcome {
    let current = ctx.data.current_state;
    let Some(handler) = registry.get(current) else {
        log::warn!(
            "entity {}: no handler registered for {}, skipping frame",
            ctx.entity,
            current.name()
        );
        return StepOutcome::Skipped;
    };

    ctx.data.state_time += dt;
    if let Some(timer) = ctx.retreat.as_deref_mut() {
        if !timer.is_retreating {
            timer.elapsed_time += dt;
        }
    }

    handler.update(ctx, dt);

    let next = handler.next_state(ctx);
    if next == current {
        return StepOutcome::Stayed;
    }
    transition(registry, ctx, next, false, sink)
}

/// Run the current state's `enter` for a freshly spawned enemy.
///
/// Spawn seeds the record already inside its first state, so no `exit`
/// runs and no transition is recorded.
pub fn enter_initial(registry: &StateRegistry, ctx: &mut BehaviorContext<'_>) -> StepOutcome {
    let current = ctx.data.current_state;
    match registry.get(current) {
        Some(handler) => {
            ctx.data.state_time = 0.0;
            handler.enter(ctx);
            StepOutcome::Stayed
        }
        None => {
            log::warn!(
                "entity {}: no handler registered for {}, spawned without enter",
                ctx.entity,
                current.name()
            );
            StepOutcome::Skipped
        }
    }
}

/// Move an enemy into `target` outside the per-frame loop.
///
/// Runs `exit` and `enter` and resets the state clock even when `target`
/// is the current state.
pub fn force_transition(
    registry: &StateRegistry,
    ctx: &mut BehaviorContext<'_>,
    target: BehaviorState,
    sink: &mut dyn TransitionSink,
) -> StepOutcome {
    transition(registry, ctx, target, true, sink)
}

fn transition(
    registry: &StateRegistry,
    ctx: &mut BehaviorContext<'_>,
    to: BehaviorState,
    forced: bool,
    sink: &mut dyn TransitionSink,
) -> StepOutcome {
    let from = ctx.data.current_state;

    // Validate before writing anything so the record never names a state
    // that was not entered.
    let Some(next_handler) = registry.get(to) else {
        log::warn!(
            "entity {}: no handler registered for {}, staying in {}",
            ctx.entity,
            to.name(),
            from.name()
        );
        return StepOutcome::Rejected { from, to };
    };

    match registry.get(from) {
        Some(handler) => handler.exit(ctx),
        None => log::warn!(
            "entity {}: no handler registered for {}, leaving without exit",
            ctx.entity,
            from.name()
        ),
    }

    let time_in_state = ctx.data.state_time;
    ctx.data.previous_state = from;
    ctx.data.current_state = to;
    ctx.data.state_time = 0.0;

    next_handler.enter(ctx);

    sink.record(&TransitionEvent {
        entity: ctx.entity,
        from,
        to,
        time_in_state,
        forced,
    });
    StepOutcome::Transitioned { from, to }
}
