//! Enemy pursuit across the toroidal arena.

use glam::DVec2;

use survival_core::types::{Position, WorldBounds};

/// Shortest displacement from `from` to `to` on the torus.
///
/// Each axis independently takes whichever of the direct delta and the
/// wrap-around delta is shorter, which also minimizes the Euclidean norm.
pub fn toroidal_delta(from: &Position, to: &Position, bounds: &WorldBounds) -> DVec2 {
    DVec2::new(
        shortest_axis_delta(to.x - from.x, bounds.width),
        shortest_axis_delta(to.y - from.y, bounds.height),
    )
}

fn shortest_axis_delta(delta: f64, bound: f64) -> f64 {
    let wrapped = bound - delta.abs();
    if wrapped < delta.abs() {
        // Going the other way round: opposite sign, wrapped magnitude.
        -delta.signum() * wrapped
    } else {
        delta
    }
}

/// Unit vector an enemy should move along to close on the player.
///
/// Returns `None` when the two positions coincide.
pub fn pursuit_direction(enemy: &Position, player: &Position, bounds: &WorldBounds) -> Option<DVec2> {
    toroidal_delta(enemy, player, bounds).try_normalize()
}
