//! Simulation constants and default tuning parameters.
//!
//! Gameplay code reads its numbers from [`crate::config::ArenaConfig`]; these
//! constants only seed the defaults.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

// --- World bounds ---

/// Arena width in world units.
pub const WORLD_WIDTH: f64 = 1600.0;

/// Arena height in world units.
pub const WORLD_HEIGHT: f64 = 1200.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Thrust speed (units per tick).
pub const PLAYER_SPEED: f64 = 0.4;

/// Turn rate (degrees per tick while a turn intent is held).
pub const PLAYER_TURN_RATE_DEG: f64 = 0.2;

/// Cooldown of the starting weapon (seconds).
pub const PLAYER_START_COOLDOWN_SECS: f64 = 0.2;

/// Player body footprint (width, height).
pub const PLAYER_FOOTPRINT: (f64, f64) = (32.0, 32.0);

// --- Enemies ---

/// Body footprint shared by all enemy classes.
pub const ENEMY_FOOTPRINT: (f64, f64) = (32.0, 32.0);

/// Damage dealt to the player on body contact.
pub const RAM_DAMAGE: i32 = 100;

/// Earliest activation delay after spawn (whole seconds).
pub const ENEMY_ACTIVATION_MIN_SECS: u32 = 5;

/// Latest activation delay after spawn (whole seconds, inclusive).
pub const ENEMY_ACTIVATION_MAX_SECS: u32 = 10;

/// Number of times the enemy class list is repeated in one wave.
pub const WAVE_REPEATS: u32 = 3;

// --- Spawn placement ---

/// Inner radius of the spawn annulus around the player.
pub const ENEMY_SPAWN_DISTANCE: f64 = 500.0;

/// Placement attempts before the last sample is accepted.
pub const SPAWN_MAX_ATTEMPTS: u32 = 100;

// --- Weapons ---

pub const GREEN_LASER_SPEED: f64 = 1.0;
pub const GREEN_LASER_DAMAGE: i32 = 20;
pub const GREEN_LASER_COOLDOWN_SECS: f64 = 4.0;

pub const BLUE_LASER_SPEED: f64 = 0.5;
pub const BLUE_LASER_DAMAGE: i32 = 40;
pub const BLUE_LASER_COOLDOWN_SECS: f64 = 8.0;

/// Laser bolt footprint (width, height) before rotation.
pub const LASER_FOOTPRINT: (f64, f64) = (1.0, 30.0);

pub const DUMB_MISSILE_SPEED: f64 = 0.8;
pub const DUMB_MISSILE_DAMAGE: i32 = 50;
pub const DUMB_MISSILE_RANGE: f64 = 500.0;
pub const DUMB_MISSILE_COOLDOWN_SECS: f64 = 6.0;

pub const SMART_MISSILE_SPEED: f64 = 0.3;
pub const SMART_MISSILE_DAMAGE: i32 = 50;
pub const SMART_MISSILE_RANGE: f64 = 800.0;
pub const SMART_MISSILE_COOLDOWN_SECS: f64 = 10.0;

/// Maximum heading change of a homing missile (degrees per tick).
pub const SMART_MISSILE_TURN_RATE_DEG: f64 = 0.05;

/// Missile footprint (width, height) before rotation.
pub const MISSILE_FOOTPRINT: (f64, f64) = (8.0, 16.0);

// --- Loot ---

/// Loot roll is drawn uniformly from 1..=LOOT_ROLL_MAX.
pub const LOOT_ROLL_MAX: u32 = 10;

/// Rolls at or below this value drop a health pickup.
pub const LOOT_HEALTH_BAND: u32 = 3;

/// Rolls above the health band and at or below this value drop a weapon pickup.
pub const LOOT_WEAPON_BAND: u32 = 10;

/// Health restored by a health pickup.
pub const HEALTH_PICKUP_AMOUNT: i32 = 20;

/// Cooldown multiplier applied to a weapon frozen into a pickup.
pub const WEAPON_PICKUP_COOLDOWN_FACTOR: f64 = 0.05;

/// Pickup footprint (width, height).
pub const PICKUP_FOOTPRINT: (f64, f64) = (24.0, 24.0);

// --- Numerics ---

/// Tolerance used when comparing accumulated distances and timestamps.
pub const EPSILON: f64 = 1e-9;
