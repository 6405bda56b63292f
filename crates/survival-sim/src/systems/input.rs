//! Player input system: turns and thrust.
//!
//! The player's heading is set directly by turn input and never re-derived
//! from velocity. Thrust moves along the heading at the player's speed;
//! without thrust the player stops.

use hecs::World;

use survival_core::commands::InputFrame;
use survival_core::components::{Heading, Player, Speed};
use survival_core::types::{normalize_degrees, Velocity};

pub fn run(world: &mut World, input: &InputFrame, turn_rate_deg: f64) {
    for (_entity, (_player, heading, speed, vel)) in
        world.query_mut::<(&Player, &mut Heading, &Speed, &mut Velocity)>()
    {
        heading.degrees = normalize_degrees(heading.degrees + input.turn_axis() * turn_rate_deg);
        *vel = if input.thrust {
            Velocity::from_heading(heading.degrees, speed.per_tick)
        } else {
            Velocity::default()
        };
    }
}
