//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.
//! `Health` and the geometric types in `types.rs` double as components.

use serde::{Deserialize, Serialize};

use crate::config::WeaponArchetype;
use crate::enums::*;

/// Marks the player-controlled entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a hostile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
}

/// Orientation in degrees (0 = up).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub degrees: f64,
}

/// Scalar movement speed (units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub per_tick: f64,
}

/// Fractional movement carried between ticks. Positions only ever move by
/// whole units; the remainder waits here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubPixel {
    pub x: f64,
    pub y: f64,
}

/// Collision footprint and category tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub kind: ColliderKind,
    pub width: f64,
    pub height: f64,
}

/// Equipped weapon and firing state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Armament {
    pub faction: Faction,
    pub weapon: Option<WeaponArchetype>,
    /// Simulation time of the last shot, `None` before the first.
    pub last_shot_secs: Option<f64>,
    /// Earliest simulation time at which this entity may fire at all.
    pub ready_at_secs: f64,
    /// Cleared when the round ends and enemies are frozen.
    pub enabled: bool,
}

/// Live projectile stamped from an archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub archetype: WeaponArchetype,
    pub owner: Faction,
    /// Distance flown so far.
    pub traveled: f64,
}

/// Pickup lying in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PowerUp {
    Health { amount: i32 },
    /// Frozen weapon copy, cooldown already shortened.
    Weapon(WeaponArchetype),
}

impl PowerUp {
    pub fn kind(&self) -> PickupKind {
        match self {
            PowerUp::Health { .. } => PickupKind::Health,
            PowerUp::Weapon(archetype) => PickupKind::Weapon(archetype.kind),
        }
    }
}
