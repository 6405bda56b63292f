//! Snapshot system: queries the ECS world and builds a complete ArenaSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use survival_core::components::*;
use survival_core::enums::*;
use survival_core::events::GameEvent;
use survival_core::state::*;
use survival_core::types::{Health, Position, SimTime, WorldBounds};

use crate::stats::RoundStats;

/// Build a complete ArenaSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    bounds: &WorldBounds,
    events: Vec<GameEvent>,
    stats: &RoundStats,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        phase,
        bounds: *bounds,
        player: build_player(world),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        pickups: build_pickups(world),
        events,
        score: stats.view(),
    }
}

fn build_player(world: &World) -> Option<EntityView> {
    world
        .query::<(&Player, &Position, &Heading, &Health, &Armament)>()
        .iter()
        .next()
        .map(|(entity, (_, pos, heading, health, armament))| EntityView {
            id: entity.to_bits().get(),
            faction: Faction::Player,
            class: None,
            position: *pos,
            heading: heading.degrees,
            health: health.current(),
            max_health: health.max(),
            weapon: armament.weapon.map(|w| w.kind),
        })
}

fn build_enemies(world: &World) -> Vec<EntityView> {
    let mut enemies: Vec<EntityView> = world
        .query::<(&Enemy, &Position, &Heading, &Health, &Armament)>()
        .iter()
        .map(|(entity, (enemy, pos, heading, health, armament))| EntityView {
            id: entity.to_bits().get(),
            faction: Faction::Enemy,
            class: Some(enemy.class),
            position: *pos,
            heading: heading.degrees,
            health: health.current(),
            max_health: health.max(),
            weapon: armament.weapon.map(|w| w.kind),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Heading)>()
        .iter()
        .map(|(entity, (projectile, pos, heading))| ProjectileView {
            id: entity.to_bits().get(),
            owner: projectile.owner,
            weapon: projectile.archetype.kind,
            position: *pos,
            heading: heading.degrees,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut pickups: Vec<PickupView> = world
        .query::<(&PowerUp, &Position)>()
        .iter()
        .map(|(entity, (power_up, pos))| PickupView {
            id: entity.to_bits().get(),
            kind: power_up.kind(),
            position: *pos,
        })
        .collect();

    pickups.sort_by_key(|p| p.id);
    pickups
}
