//! Simulation engine for GYRE.
//!
//! Owns the hecs ECS world, runs the enemy systems once per frame,
//! and produces `BehaviorSnapshot`s for the renderer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{CancelToken, SimConfig, SimulationEngine};
pub use gyre_behavior as behavior;
pub use gyre_core as core;

#[cfg(test)]
mod tests;
