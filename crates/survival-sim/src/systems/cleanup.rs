//! Cleanup system: expires projectiles and flushes the despawn buffer.

use hecs::{Entity, World};

use survival_core::components::{Collider, Heading, Projectile};
use survival_core::constants::EPSILON;
use survival_core::types::{Aabb, Position, WorldBounds};

/// Queue projectiles that have flown their full range or left the arena.
pub fn expire_projectiles(world: &World, bounds: &WorldBounds, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (projectile, pos, heading, collider)) in world
        .query::<(&Projectile, &Position, &Heading, &Collider)>()
        .iter()
    {
        let spent = projectile
            .archetype
            .range
            .is_some_and(|range| projectile.traveled + EPSILON >= range);
        let gone = Aabb::rotated(pos, collider.width, collider.height, heading.degrees).is_outside(bounds);
        if spent || gone {
            despawn_buffer.push(entity);
        }
    }
}

/// Despawn everything queued in the buffer.
pub fn flush(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
