//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod behavior;
pub mod cleanup;
pub mod scale_animation;
pub mod snapshot;
pub mod wave_spawner;
