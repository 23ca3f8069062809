//! Transition sinks.
//!
//! The driver reports every applied transition to a sink handed in by the
//! caller, so each engine (and each test) decides what happens to them.

use gyre_core::events::{TransitionEvent, STATE_CATEGORY};

/// Receives applied state transitions. Observability only.
pub trait TransitionSink {
    fn record(&mut self, event: &TransitionEvent);
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TransitionSink for NullSink {
    fn record(&mut self, _event: &TransitionEvent) {}
}

/// Forwards events to the `log` facade under the `STATE` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl TransitionSink for LogSink {
    fn record(&mut self, event: &TransitionEvent) {
        log::debug!(
            target: STATE_CATEGORY,
            "entity {}: {} -> {} after {:.2}s{}",
            event.entity,
            event.from.name(),
            event.to.name(),
            event.time_in_state,
            if event.forced { " (forced)" } else { "" }
        );
    }
}

impl TransitionSink for Vec<TransitionEvent> {
    fn record(&mut self, event: &TransitionEvent) {
        self.push(*event);
    }
}
