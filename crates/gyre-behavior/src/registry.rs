//! State registry: lookup from state to handler.

use std::collections::HashMap;

use gyre_core::enums::BehaviorState;

use crate::handler::StateHandler;
use crate::states::{AttackingState, EnteringState, HoveringState, OrbitingState, RetreatingState};

/// Handlers keyed by the state they report. Filled once at system construction.
#[derive(Default)]
pub struct StateRegistry {
    handlers: HashMap<BehaviorState, Box<dyn StateHandler>>,
}

impl StateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the five built-in handlers.
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        registry.register(EnteringState);
        registry.register(OrbitingState);
        registry.register(AttackingState);
        registry.register(RetreatingState);
        registry.register(HoveringState);
        registry
    }

    /// Register `handler` under its `state_type()`. Replaces any previous handler.
    pub fn register<H: StateHandler + 'static>(&mut self, handler: H) {
        self.handlers.insert(handler.state_type(), Box::new(handler));
    }

    /// Remove the handler for `state`, returning whether one was registered.
    pub fn unregister(&mut self, state: BehaviorState) -> bool {
        self.handlers.remove(&state).is_some()
    }

    pub fn get(&self, state: BehaviorState) -> Option<&dyn StateHandler> {
        self.handlers.get(&state).map(|h| h.as_ref())
    }

    pub fn contains(&self, state: BehaviorState) -> bool {
        self.handlers.contains_key(&state)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
