//! Enemy pursuit system.
//!
//! Every enemy heads straight for the player along the shortest path on the
//! torus and faces its direction of travel.

use hecs::World;

use survival_ai::pursuit::pursuit_direction;
use survival_core::components::{Enemy, Heading, Player, Speed};
use survival_core::types::{Position, Velocity, WorldBounds};

pub fn run(world: &mut World, bounds: &WorldBounds) {
    let player_pos = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    for (_entity, (_enemy, pos, speed, vel, heading)) in
        world.query_mut::<(&Enemy, &Position, &Speed, &mut Velocity, &mut Heading)>()
    {
        let direction = player_pos.and_then(|target| pursuit_direction(pos, &target, bounds));
        match direction {
            Some(dir) if speed.per_tick > 0.0 => {
                *vel = Velocity::new(dir.x * speed.per_tick, dir.y * speed.per_tick);
                heading.degrees = vel.heading();
            }
            // Frozen, on top of the player, or no player: hold still and
            // keep facing the same way.
            _ => *vel = Velocity::default(),
        }
    }
}
