//! Kinematic integration system.
//!
//! Positions move by whole units only. Velocity is added to a sub-unit
//! carry each tick, the integer part of the carry is applied to the
//! position, and the fraction waits for the next tick.

use hecs::World;

use survival_core::components::{Heading, Projectile, SubPixel};
use survival_core::types::{Health, Position, Velocity, WorldBounds};

/// Point projectile velocity along the current heading.
pub fn orient_projectiles(world: &mut World) {
    for (_entity, (projectile, heading, vel)) in
        world.query_mut::<(&Projectile, &Heading, &mut Velocity)>()
    {
        *vel = Velocity::from_heading(heading.degrees, projectile.archetype.speed);
    }
}

/// Integrate every moving entity and projectile.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, carry)) in
        world.query_mut::<(&mut Position, &Velocity, &mut SubPixel)>()
    {
        carry.x += vel.x;
        carry.y += vel.y;
        let step_x = carry.x.trunc();
        let step_y = carry.y.trunc();
        pos.x += step_x;
        pos.y += step_y;
        carry.x -= step_x;
        carry.y -= step_y;
    }

    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.traveled += projectile.archetype.speed;
    }
}

/// Wrap bodies (anything with health) around the torus. Projectiles are
/// never wrapped.
pub fn wrap_bodies(world: &mut World, bounds: &WorldBounds) {
    for (_entity, (pos, _health)) in world.query_mut::<(&mut Position, &Health)>() {
        *pos = bounds.wrap(*pos);
    }
}
