//! Bounded-turn-rate homing for guided projectiles.
//!
//! A homing missile re-acquires its target every tick and rotates toward it
//! by at most a fixed step, always through the shorter arc.

use survival_core::enums::Faction;
use survival_core::types::{normalize_degrees, Position};

/// Input to the homing step for a single missile.
pub struct HomingContext<'a> {
    /// Faction that fired the missile.
    pub owner: Faction,
    pub position: Position,
    pub heading_deg: f64,
    pub turn_rate_deg: f64,
    /// Player position, if the player is alive.
    pub player: Option<Position>,
    /// Positions of all live enemies.
    pub enemies: &'a [Position],
}

/// Output of the homing step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingUpdate {
    pub heading_deg: f64,
    /// Target this tick's turn was computed against.
    pub target: Option<Position>,
}

/// Signed rotation from `from_deg` to `to_deg`, wrapped into `[-180, 180)`.
pub fn angle_delta(from_deg: f64, to_deg: f64) -> f64 {
    (to_deg - from_deg + 180.0).rem_euclid(360.0) - 180.0
}

/// Rotate `current_deg` toward `bearing_deg` by at most `max_step_deg`.
pub fn turn_toward(current_deg: f64, bearing_deg: f64, max_step_deg: f64) -> f64 {
    let diff = angle_delta(current_deg, bearing_deg);
    let step = diff.clamp(-max_step_deg, max_step_deg);
    normalize_degrees(current_deg + step)
}

/// Nearest position by straight-line distance. Ties keep the earliest.
pub fn nearest(from: &Position, candidates: &[Position]) -> Option<Position> {
    candidates.iter().copied().fold(None, |best: Option<(Position, f64)>, candidate| {
        let d = from.distance_to(&candidate);
        match best {
            Some((_, best_d)) if best_d <= d => best,
            _ => Some((candidate, d)),
        }
    })
    .map(|(pos, _)| pos)
}

/// Pick the target for a missile: enemy missiles chase the player, player
/// missiles chase the nearest enemy.
pub fn select_target(ctx: &HomingContext) -> Option<Position> {
    match ctx.owner {
        Faction::Enemy => ctx.player,
        Faction::Player => nearest(&ctx.position, ctx.enemies),
    }
}

/// Evaluate one homing step. Without a target the heading is held.
pub fn steer(ctx: &HomingContext) -> HomingUpdate {
    match select_target(ctx) {
        Some(target) if target != ctx.position => HomingUpdate {
            heading_deg: turn_toward(
                ctx.heading_deg,
                ctx.position.bearing_to(&target),
                ctx.turn_rate_deg,
            ),
            target: Some(target),
        },
        target => HomingUpdate {
            heading_deg: ctx.heading_deg,
            target,
        },
    }
}
