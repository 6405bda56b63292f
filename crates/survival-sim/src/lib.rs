//! Simulation engine for the Survival arena.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces `ArenaSnapshot`s for the presentation layer.

pub mod engine;
pub mod loot;
pub mod stats;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use survival_core as core;
