//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side an entity or projectile fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// Weapon archetype identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    /// Fast, light laser bolt with unbounded range.
    GreenLaser,
    /// Slow, heavy laser bolt with unbounded range.
    BlueLaser,
    /// Unguided short-range missile.
    DumbMissile,
    /// Homing missile with a bounded turn rate.
    SmartMissile,
}

/// How a projectile steers after launch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Guidance {
    /// Flies straight along its launch heading.
    Unguided,
    /// Turns toward its target by at most `turn_rate_deg` per tick.
    Homing { turn_rate_deg: f64 },
}

/// Enemy class within a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Unarmed, fast; kills by body contact.
    Rammer,
    GreenGunner,
    BlueGunner,
    Bomber,
    Hunter,
}

/// Kind of pickup dropped by a dead enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Health,
    Weapon(WeaponKind),
}

/// Collision category tag carried by every collidable entity.
///
/// The resolver looks rules up by a pair of these tags instead of
/// inspecting component sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderKind {
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
    HealthPickup,
    WeaponPickup,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Title,
    Playing,
    GameOver,
}

impl Faction {
    /// Collider tag for projectiles fired by this faction.
    pub fn projectile_collider(self) -> ColliderKind {
        match self {
            Faction::Player => ColliderKind::PlayerProjectile,
            Faction::Enemy => ColliderKind::EnemyProjectile,
        }
    }

    /// Collider tag for a body of this faction.
    pub fn body_collider(self) -> ColliderKind {
        match self {
            Faction::Player => ColliderKind::Player,
            Faction::Enemy => ColliderKind::Enemy,
        }
    }
}

impl PickupKind {
    pub fn collider(self) -> ColliderKind {
        match self {
            PickupKind::Health => ColliderKind::HealthPickup,
            PickupKind::Weapon(_) => ColliderKind::WeaponPickup,
        }
    }
}
