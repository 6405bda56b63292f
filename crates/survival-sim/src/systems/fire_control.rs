//! Fire control: launches projectiles from every armed entity that is
//! allowed to shoot this tick.
//!
//! The player shoots while the fire intent is held. Enemies shoot whenever
//! their activation delay and cooldown both allow it.

use hecs::World;

use survival_core::components::{Armament, Heading, Player};
use survival_core::config::WeaponArchetype;
use survival_core::constants::EPSILON;
use survival_core::enums::Faction;
use survival_core::events::GameEvent;
use survival_core::types::Position;

use crate::stats::RoundStats;
use crate::world_setup;

/// True when `armament` may fire at `now_secs`.
pub fn can_fire(armament: &Armament, now_secs: f64) -> bool {
    let Some(weapon) = armament.weapon.as_ref() else {
        return false;
    };
    if !armament.enabled || now_secs + EPSILON < armament.ready_at_secs {
        return false;
    }
    match armament.last_shot_secs {
        None => true,
        Some(last) => now_secs - last + EPSILON >= weapon.cooldown_secs,
    }
}

pub fn run(
    world: &mut World,
    now_secs: f64,
    fire_held: bool,
    events: &mut Vec<GameEvent>,
    stats: &mut RoundStats,
) {
    let mut shots: Vec<(WeaponArchetype, Faction, Position, f64)> = Vec::new();

    for (_entity, (pos, heading, armament, player)) in
        world.query_mut::<(&Position, &Heading, &mut Armament, Option<&Player>)>()
    {
        if player.is_some() && !fire_held {
            continue;
        }
        if !can_fire(armament, now_secs) {
            continue;
        }
        if let Some(weapon) = armament.weapon {
            armament.last_shot_secs = Some(now_secs);
            shots.push((weapon, armament.faction, *pos, heading.degrees));
        }
    }

    for (weapon, faction, position, heading) in shots {
        world_setup::spawn_projectile(world, weapon, faction, position, heading);
        if faction == Faction::Player {
            stats.shots_fired += 1;
        }
        events.push(GameEvent::ShotFired {
            faction,
            weapon: weapon.kind,
            position,
        });
    }
}
