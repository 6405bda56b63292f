//! Arena state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, WorldBounds};

/// Complete arena state after a tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub bounds: WorldBounds,
    /// `None` outside a round or once the player has died.
    pub player: Option<EntityView>,
    pub enemies: Vec<EntityView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub events: Vec<GameEvent>,
    pub score: ScoreView,
}

/// A player or enemy body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    /// Stable id for the lifetime of the entity.
    pub id: u64,
    pub faction: Faction,
    pub class: Option<EnemyClass>,
    pub position: Position,
    /// Orientation in degrees (0 = up).
    pub heading: f64,
    pub health: i32,
    pub max_health: i32,
    pub weapon: Option<WeaponKind>,
}

/// A projectile in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub owner: Faction,
    pub weapon: WeaponKind,
    pub position: Position,
    pub heading: f64,
}

/// A pickup waiting to be collected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u64,
    pub kind: PickupKind,
    pub position: Position,
}

/// Running round statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub enemies_total: u32,
    pub shots_fired: u32,
    pub pickups_collected: u32,
}

impl Default for ArenaSnapshot {
    fn default() -> Self {
        Self {
            time: SimTime::default(),
            phase: GamePhase::default(),
            bounds: WorldBounds::new(
                crate::constants::WORLD_WIDTH,
                crate::constants::WORLD_HEIGHT,
            ),
            player: None,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            pickups: Vec::new(),
            events: Vec::new(),
            score: ScoreView::default(),
        }
    }
}
