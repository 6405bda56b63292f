//! One-shot events emitted by the simulation for audio and visual feedback.
//!
//! The presentation layer maps these to sounds and effects; the core never
//! calls into rendering or audio itself.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile was launched.
    ShotFired {
        faction: Faction,
        weapon: WeaponKind,
        position: Position,
    },
    /// A projectile struck a body.
    HitLanded {
        target: Faction,
        weapon: WeaponKind,
        damage: i32,
        position: Position,
    },
    /// The player collided with an enemy.
    RamContact { damage: i32, position: Position },
    /// An entity's health reached zero.
    EntityDied {
        faction: Faction,
        class: Option<EnemyClass>,
        position: Position,
    },
    /// A pickup was dropped by a dead enemy.
    PickupDropped { kind: PickupKind, position: Position },
    /// The player collected a pickup.
    PickupCollected { kind: PickupKind, position: Position },
    /// The round state machine changed phase.
    PhaseChanged { from: GamePhase, to: GamePhase },
}
