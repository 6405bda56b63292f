//! Entity spawn factories for setting up the arena.
//!
//! Creates the player, enemy waves, projectiles and pickups with the
//! component bundles the systems expect.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use survival_core::components::*;
use survival_core::config::{ArenaConfig, EnemyTemplate, SpawnRules, WeaponArchetype};
use survival_core::enums::*;
use survival_core::types::{Aabb, Health, Position, Velocity, WorldBounds};

/// Spawn the player at the world center, facing up, with a full health pool
/// and the configured starting weapon.
pub fn spawn_player(world: &mut World, config: &ArenaConfig) -> Entity {
    let player = &config.player;
    let mut weapon = config.weapons.get(player.weapon);
    if let Some(cooldown) = player.cooldown_override_secs {
        weapon.cooldown_secs = cooldown;
    }

    world.spawn((
        Player,
        config.bounds().center(),
        Velocity::default(),
        SubPixel::default(),
        Heading::default(),
        Speed {
            per_tick: player.speed,
        },
        Health::new(player.max_health),
        Collider {
            kind: ColliderKind::Player,
            width: player.footprint.0,
            height: player.footprint.1,
        },
        Armament {
            faction: Faction::Player,
            weapon: Some(weapon),
            last_shot_secs: None,
            ready_at_secs: 0.0,
            enabled: true,
        },
    ))
}

/// Spawn one enemy from a template. It may not fire before `ready_at_secs`.
pub fn spawn_enemy(
    world: &mut World,
    config: &ArenaConfig,
    template: &EnemyTemplate,
    position: Position,
    ready_at_secs: f64,
) -> Entity {
    let (width, height) = config.enemy.footprint;
    world.spawn((
        Enemy {
            class: template.class,
        },
        position,
        Velocity::default(),
        SubPixel::default(),
        Heading::default(),
        Speed {
            per_tick: template.speed,
        },
        Health::new(template.health),
        Collider {
            kind: ColliderKind::Enemy,
            width,
            height,
        },
        Armament {
            faction: Faction::Enemy,
            weapon: template.weapon.map(|kind| config.weapons.get(kind)),
            last_shot_secs: None,
            ready_at_secs,
            enabled: true,
        },
    ))
}

/// Populate the full enemy wave around `center`. Returns the number spawned.
///
/// Each enemy draws a placement from the spawn annulus and an activation
/// delay in whole seconds from the configured range.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &ArenaConfig,
    center: Position,
    now_secs: f64,
) -> u32 {
    let bounds = config.bounds();
    let (delay_lo, delay_hi) = config.enemy.activation_delay_secs;
    let mut count = 0;

    for _ in 0..config.wave.repeats {
        for template in &config.wave.templates {
            let position = sample_spawn_position(
                world,
                rng,
                center,
                &bounds,
                &config.spawn,
                config.enemy.footprint,
            );
            let delay = rng.gen_range(delay_lo..=delay_hi);
            spawn_enemy(world, config, template, position, now_secs + f64::from(delay));
            count += 1;
        }
    }
    count
}

/// Sample a position in the annulus around `center` whose footprint does not
/// overlap any live collider.
///
/// Gives up after `rules.max_attempts` samples and accepts the last one.
pub fn sample_spawn_position(
    world: &World,
    rng: &mut ChaCha8Rng,
    center: Position,
    bounds: &WorldBounds,
    rules: &SpawnRules,
    footprint: (f64, f64),
) -> Position {
    let outer = (bounds.width / 2.0).max(rules.min_distance);
    let mut candidate = center;

    for _ in 0..rules.max_attempts {
        let radius = rng.gen_range(rules.min_distance..=outer);
        let angle = rng.gen_range(0.0..360.0);
        let offset = Velocity::from_heading(angle, radius);
        candidate = bounds.wrap(Position::new(center.x + offset.x, center.y + offset.y));

        if !overlaps_any(world, &Aabb::from_center(&candidate, footprint.0, footprint.1)) {
            return candidate;
        }
    }

    tracing::warn!(
        attempts = rules.max_attempts,
        x = candidate.x,
        y = candidate.y,
        "Spawn placement hit the retry cap, accepting overlapping position"
    );
    candidate
}

fn overlaps_any(world: &World, area: &Aabb) -> bool {
    world
        .query::<(&Position, &Collider)>()
        .iter()
        .any(|(_, (pos, collider))| {
            Aabb::from_center(pos, collider.width, collider.height).overlaps(area)
        })
}

/// Launch a projectile stamped from `archetype`.
pub fn spawn_projectile(
    world: &mut World,
    archetype: WeaponArchetype,
    owner: Faction,
    position: Position,
    heading_deg: f64,
) -> Entity {
    world.spawn((
        Projectile {
            archetype,
            owner,
            traveled: 0.0,
        },
        position,
        Velocity::from_heading(heading_deg, archetype.speed),
        SubPixel::default(),
        Heading {
            degrees: heading_deg,
        },
        Collider {
            kind: owner.projectile_collider(),
            width: archetype.footprint.0,
            height: archetype.footprint.1,
        },
    ))
}

/// Drop a pickup at `position`.
pub fn spawn_pickup(world: &mut World, power_up: PowerUp, position: Position, footprint: (f64, f64)) -> Entity {
    world.spawn((
        power_up,
        position,
        Collider {
            kind: power_up.kind().collider(),
            width: footprint.0,
            height: footprint.1,
        },
    ))
}
