//! Homing steering for guided projectiles.

use hecs::World;

use survival_ai::homing::{steer, HomingContext};
use survival_core::components::{Enemy, Heading, Player, Projectile};
use survival_core::enums::Guidance;
use survival_core::types::Position;

/// Turn every homing projectile toward its current target.
///
/// Targets are re-acquired every tick: enemy missiles chase the player,
/// player missiles chase whichever enemy is nearest right now.
pub fn run(world: &mut World) {
    let player = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos);

    let mut enemies: Vec<(u64, Position)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_, pos))| (entity.to_bits().get(), *pos))
        .collect();
    // Stable order so nearest-target ties break the same way every run.
    enemies.sort_by_key(|(id, _)| *id);
    let enemies: Vec<Position> = enemies.into_iter().map(|(_, pos)| pos).collect();

    for (_entity, (projectile, pos, heading)) in
        world.query_mut::<(&Projectile, &Position, &mut Heading)>()
    {
        let Guidance::Homing { turn_rate_deg } = projectile.archetype.guidance else {
            continue;
        };
        let update = steer(&HomingContext {
            owner: projectile.owner,
            position: *pos,
            heading_deg: heading.degrees,
            turn_rate_deg,
            player,
            enemies: &enemies,
        });
        heading.degrees = update.heading_deg;
    }
}
