//! Survival host application.
//!
//! Wires the simulation engine to a driver: either a headless runner that
//! ticks as fast as possible, or a real-time game loop thread that a
//! presentation layer feeds with input and polls for snapshots.

pub mod autopilot;
pub mod game_loop;
pub mod headless;
pub mod state;

pub use survival_core as core;
