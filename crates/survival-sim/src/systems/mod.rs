//! ECS systems that operate on the arena world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or on the engine.

pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod fire_control;
pub mod homing;
pub mod input;
pub mod movement;
pub mod snapshot;
