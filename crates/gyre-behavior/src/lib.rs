//! Enemy behavior for GYRE.
//!
//! Implements the per-enemy behavior state machine: easing helpers,
//! the five state handlers, the state registry, and the per-entity
//! driver that advances, updates, and transitions an enemy each frame.
//! No ECS dependency: handlers operate on borrowed plain data.

pub mod context;
pub mod easing;
pub mod handler;
pub mod machine;
pub mod registry;
pub mod states;
pub mod trace;

pub use context::BehaviorContext;
pub use gyre_core as core;
pub use handler::StateHandler;
pub use machine::{enter_initial, force_transition, step, StepOutcome};
pub use registry::StateRegistry;
pub use trace::{LogSink, NullSink, TransitionSink};
