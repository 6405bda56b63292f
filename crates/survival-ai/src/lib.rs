//! Steering for the Survival arena.
//!
//! Pure functions that compute enemy pursuit directions and homing missile
//! headings from plain data. No ECS dependency.

pub mod homing;
pub mod pursuit;

#[cfg(test)]
mod tests;
