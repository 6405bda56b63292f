//! Arena configuration supplied to the engine at round reset.
//!
//! Every section falls back to the defaults in [`crate::constants`], so a
//! configuration file only needs to name the values it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyClass, Guidance, WeaponKind};
use crate::error::{ConfigError, Result};
use crate::types::WorldBounds;

/// Immutable weapon template. Projectiles are stamped from a copy of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponArchetype {
    pub kind: WeaponKind,
    /// Linear speed (units per tick).
    pub speed: f64,
    pub damage: i32,
    /// Maximum travel distance; `None` is unbounded.
    pub range: Option<f64>,
    /// Minimum time between shots (seconds).
    pub cooldown_secs: f64,
    /// Unrotated projectile footprint (width, height).
    pub footprint: (f64, f64),
    pub guidance: Guidance,
}

/// One enemy class within the wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub class: EnemyClass,
    pub health: i32,
    /// Pursuit speed (units per tick).
    pub speed: f64,
    pub weapon: Option<WeaponKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_health: i32,
    pub speed: f64,
    pub turn_rate_deg: f64,
    pub weapon: WeaponKind,
    /// Replaces the starting weapon's cooldown when set.
    pub cooldown_override_secs: Option<f64>,
    pub footprint: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyRules {
    /// Damage the player takes per tick of body contact.
    pub ram_damage: i32,
    /// Damage the enemy takes per tick of body contact.
    pub ram_damage_to_enemy: i32,
    /// Inclusive range of whole seconds before a fresh enemy may fire.
    pub activation_delay_secs: (u32, u32),
    pub footprint: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    /// How many times `templates` is spawned per round.
    pub repeats: u32,
    pub templates: Vec<EnemyTemplate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootTable {
    /// Rolls are uniform over `1..=roll_max`.
    pub roll_max: u32,
    /// Rolls `<= health_band` drop a health pickup.
    pub health_band: u32,
    /// Rolls in `(health_band, weapon_band]` drop a weapon pickup.
    pub weapon_band: u32,
    pub heal_amount: i32,
    /// Multiplier applied to the cooldown of a weapon frozen into a pickup.
    pub weapon_cooldown_factor: f64,
    pub footprint: (f64, f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRules {
    /// Inner radius of the spawn annulus; the outer radius is half the world width.
    pub min_distance: f64,
    pub max_attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponTable {
    pub green_laser: WeaponArchetype,
    pub blue_laser: WeaponArchetype,
    pub dumb_missile: WeaponArchetype,
    pub smart_missile: WeaponArchetype,
}

/// Complete arena configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyRules,
    pub weapons: WeaponTable,
    pub wave: WaveConfig,
    pub loot: LootTable,
    pub spawn: SpawnRules,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            speed: PLAYER_SPEED,
            turn_rate_deg: PLAYER_TURN_RATE_DEG,
            weapon: WeaponKind::GreenLaser,
            cooldown_override_secs: Some(PLAYER_START_COOLDOWN_SECS),
            footprint: PLAYER_FOOTPRINT,
        }
    }
}

impl Default for EnemyRules {
    fn default() -> Self {
        Self {
            ram_damage: RAM_DAMAGE,
            ram_damage_to_enemy: 0,
            activation_delay_secs: (ENEMY_ACTIVATION_MIN_SECS, ENEMY_ACTIVATION_MAX_SECS),
            footprint: ENEMY_FOOTPRINT,
        }
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            repeats: WAVE_REPEATS,
            templates: vec![
                EnemyTemplate {
                    class: EnemyClass::Rammer,
                    health: 100,
                    speed: 0.2,
                    weapon: None,
                },
                EnemyTemplate {
                    class: EnemyClass::GreenGunner,
                    health: 160,
                    speed: 0.03,
                    weapon: Some(WeaponKind::GreenLaser),
                },
                EnemyTemplate {
                    class: EnemyClass::BlueGunner,
                    health: 240,
                    speed: 0.04,
                    weapon: Some(WeaponKind::BlueLaser),
                },
                EnemyTemplate {
                    class: EnemyClass::Bomber,
                    health: 120,
                    speed: 0.05,
                    weapon: Some(WeaponKind::DumbMissile),
                },
                EnemyTemplate {
                    class: EnemyClass::Hunter,
                    health: 120,
                    speed: 0.06,
                    weapon: Some(WeaponKind::SmartMissile),
                },
            ],
        }
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            roll_max: LOOT_ROLL_MAX,
            health_band: LOOT_HEALTH_BAND,
            weapon_band: LOOT_WEAPON_BAND,
            heal_amount: HEALTH_PICKUP_AMOUNT,
            weapon_cooldown_factor: WEAPON_PICKUP_COOLDOWN_FACTOR,
            footprint: PICKUP_FOOTPRINT,
        }
    }
}

impl Default for SpawnRules {
    fn default() -> Self {
        Self {
            min_distance: ENEMY_SPAWN_DISTANCE,
            max_attempts: SPAWN_MAX_ATTEMPTS,
        }
    }
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            green_laser: WeaponArchetype {
                kind: WeaponKind::GreenLaser,
                speed: GREEN_LASER_SPEED,
                damage: GREEN_LASER_DAMAGE,
                range: None,
                cooldown_secs: GREEN_LASER_COOLDOWN_SECS,
                footprint: LASER_FOOTPRINT,
                guidance: Guidance::Unguided,
            },
            blue_laser: WeaponArchetype {
                kind: WeaponKind::BlueLaser,
                speed: BLUE_LASER_SPEED,
                damage: BLUE_LASER_DAMAGE,
                range: None,
                cooldown_secs: BLUE_LASER_COOLDOWN_SECS,
                footprint: LASER_FOOTPRINT,
                guidance: Guidance::Unguided,
            },
            dumb_missile: WeaponArchetype {
                kind: WeaponKind::DumbMissile,
                speed: DUMB_MISSILE_SPEED,
                damage: DUMB_MISSILE_DAMAGE,
                range: Some(DUMB_MISSILE_RANGE),
                cooldown_secs: DUMB_MISSILE_COOLDOWN_SECS,
                footprint: MISSILE_FOOTPRINT,
                guidance: Guidance::Unguided,
            },
            smart_missile: WeaponArchetype {
                kind: WeaponKind::SmartMissile,
                speed: SMART_MISSILE_SPEED,
                damage: SMART_MISSILE_DAMAGE,
                range: Some(SMART_MISSILE_RANGE),
                cooldown_secs: SMART_MISSILE_COOLDOWN_SECS,
                footprint: MISSILE_FOOTPRINT,
                guidance: Guidance::Homing {
                    turn_rate_deg: SMART_MISSILE_TURN_RATE_DEG,
                },
            },
        }
    }
}

impl WeaponArchetype {
    /// Copy of this archetype with its cooldown scaled by `factor`.
    pub fn with_cooldown_factor(&self, factor: f64) -> Self {
        Self {
            cooldown_secs: self.cooldown_secs * factor,
            ..*self
        }
    }

    fn validate(&self) -> Result<()> {
        if self.speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{:?} speed must be positive, got {}",
                self.kind, self.speed
            )));
        }
        if self.cooldown_secs < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{:?} cooldown must not be negative, got {}",
                self.kind, self.cooldown_secs
            )));
        }
        if matches!(self.range, Some(r) if r <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "{:?} range must be positive when bounded",
                self.kind
            )));
        }
        Ok(())
    }
}

impl WeaponTable {
    /// Look up the archetype for a weapon kind.
    pub fn get(&self, kind: WeaponKind) -> WeaponArchetype {
        match kind {
            WeaponKind::GreenLaser => self.green_laser,
            WeaponKind::BlueLaser => self.blue_laser,
            WeaponKind::DumbMissile => self.dumb_missile,
            WeaponKind::SmartMissile => self.smart_missile,
        }
    }

    fn iter(&self) -> impl Iterator<Item = &WeaponArchetype> {
        [
            &self.green_laser,
            &self.blue_laser,
            &self.dumb_missile,
            &self.smart_missile,
        ]
        .into_iter()
    }
}

impl WaveConfig {
    /// Number of enemies a full wave spawns.
    pub fn total_enemies(&self) -> u32 {
        self.repeats * self.templates.len() as u32
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.world.width, self.world.height)
    }

    /// Check the semantic constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.world.width <= 0.0 || self.world.height <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "world must have positive size, got {}x{}",
                self.world.width, self.world.height
            )));
        }
        if self.player.max_health <= 0 {
            return Err(ConfigError::Invalid(
                "player max health must be positive".into(),
            ));
        }
        for archetype in self.weapons.iter() {
            archetype.validate()?;
        }
        let (lo, hi) = self.enemy.activation_delay_secs;
        if lo > hi {
            return Err(ConfigError::Invalid(format!(
                "activation delay range is inverted: {lo}..={hi}"
            )));
        }
        if self.wave.templates.is_empty() || self.wave.repeats == 0 {
            return Err(ConfigError::Invalid("wave must spawn at least one enemy".into()));
        }
        if let Some(t) = self.wave.templates.iter().find(|t| t.health <= 0) {
            return Err(ConfigError::Invalid(format!(
                "{:?} health must be positive",
                t.class
            )));
        }
        if self.enemy.ram_damage < 0 || self.enemy.ram_damage_to_enemy < 0 {
            return Err(ConfigError::Invalid(format!(
                "ram damage must not be negative, got {} to player and {} to enemy",
                self.enemy.ram_damage, self.enemy.ram_damage_to_enemy
            )));
        }
        let loot = &self.loot;
        if loot.heal_amount < 0 {
            return Err(ConfigError::Invalid(format!(
                "heal amount must not be negative, got {}",
                loot.heal_amount
            )));
        }
        if loot.roll_max == 0 || loot.health_band > loot.weapon_band {
            return Err(ConfigError::Invalid(format!(
                "loot bands must satisfy health <= weapon (roll 1..={}, health {}, weapon {})",
                loot.roll_max, loot.health_band, loot.weapon_band
            )));
        }
        if self.spawn.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "spawn placement needs at least one attempt".into(),
            ));
        }
        if self.spawn.min_distance < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn distance must not be negative, got {}",
                self.spawn.min_distance
            )));
        }
        if self.spawn.min_distance > self.world.width / 2.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn distance {} exceeds half the world width",
                self.spawn.min_distance
            )));
        }
        Ok(())
    }
}
