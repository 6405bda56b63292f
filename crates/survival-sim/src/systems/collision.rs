//! Collision and damage resolution.
//!
//! Runs once per tick over four ordered pairs of groups:
//! player vs enemies, player vs enemy projectiles, enemies vs player
//! projectiles, and player vs pickups. Every overlapping pair is resolved by
//! at most one rule looked up from the two collider tags. A projectile or
//! pickup is consumed at most once, and an entity that dies takes no further
//! part in the tick.

use std::collections::HashSet;

use hecs::{Entity, World};

use survival_core::components::*;
use survival_core::config::WeaponArchetype;
use survival_core::enums::*;
use survival_core::events::GameEvent;
use survival_core::types::{Aabb, Health, Position};

use crate::stats::RoundStats;

/// Resolution rule for one overlapping pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Player touches an enemy body.
    Ram,
    /// A projectile strikes a body of the opposing faction.
    Hit,
    /// Player collects a health pickup.
    Heal,
    /// Player collects a weapon pickup.
    Rearm,
}

/// Damage dealt by body contact.
#[derive(Debug, Clone, Copy)]
pub struct RamDamage {
    pub to_player: i32,
    pub to_enemy: i32,
}

/// An entity whose health reached zero this tick.
#[derive(Debug, Clone, Copy)]
pub struct Death {
    pub faction: Faction,
    pub class: Option<EnemyClass>,
    pub position: Position,
    pub weapon: Option<WeaponArchetype>,
}

/// Look up the rule for a pair of collider tags. The first tag is always the
/// body being affected. Pairs with no rule are ignored.
pub fn rule_for(subject: ColliderKind, other: ColliderKind) -> Option<Rule> {
    use ColliderKind::*;
    match (subject, other) {
        (Player, Enemy) => Some(Rule::Ram),
        (Player, EnemyProjectile) | (Enemy, PlayerProjectile) => Some(Rule::Hit),
        (Player, HealthPickup) => Some(Rule::Heal),
        (Player, WeaponPickup) => Some(Rule::Rearm),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy)]
struct Collidable {
    entity: Entity,
    kind: ColliderKind,
    bounds: Aabb,
}

#[derive(Default)]
struct Groups {
    player: Vec<Collidable>,
    enemies: Vec<Collidable>,
    player_projectiles: Vec<Collidable>,
    enemy_projectiles: Vec<Collidable>,
    pickups: Vec<Collidable>,
}

struct Resolver<'a> {
    world: &'a mut World,
    ram: RamDamage,
    events: &'a mut Vec<GameEvent>,
    stats: &'a mut RoundStats,
    despawn_buffer: &'a mut Vec<Entity>,
    /// Dead bodies and consumed projectiles/pickups.
    spent: HashSet<Entity>,
    deaths: Vec<Death>,
}

/// Resolve all collisions for this tick. Consumed projectiles, collected
/// pickups and dead enemies are queued in `despawn_buffer`; a dead player is
/// left in place for the round state machine. Returns the deaths in the
/// order they happened.
pub fn run(
    world: &mut World,
    ram: RamDamage,
    events: &mut Vec<GameEvent>,
    stats: &mut RoundStats,
    despawn_buffer: &mut Vec<Entity>,
) -> Vec<Death> {
    let groups = gather(world);
    let mut resolver = Resolver {
        world,
        ram,
        events,
        stats,
        despawn_buffer,
        spent: HashSet::new(),
        deaths: Vec::new(),
    };

    resolver.resolve_pairs(&groups.player, &groups.enemies);
    resolver.resolve_pairs(&groups.player, &groups.enemy_projectiles);
    resolver.resolve_pairs(&groups.enemies, &groups.player_projectiles);
    resolver.resolve_pairs(&groups.player, &groups.pickups);

    resolver.deaths
}

fn gather(world: &World) -> Groups {
    let mut groups = Groups::default();

    for (entity, (pos, collider, heading, projectile)) in world
        .query::<(&Position, &Collider, Option<&Heading>, Option<&Projectile>)>()
        .iter()
    {
        let bounds = match (projectile, heading) {
            (Some(_), Some(heading)) => {
                Aabb::rotated(pos, collider.width, collider.height, heading.degrees)
            }
            _ => Aabb::from_center(pos, collider.width, collider.height),
        };
        let item = Collidable {
            entity,
            kind: collider.kind,
            bounds,
        };
        match collider.kind {
            ColliderKind::Player => groups.player.push(item),
            ColliderKind::Enemy => groups.enemies.push(item),
            ColliderKind::PlayerProjectile => groups.player_projectiles.push(item),
            ColliderKind::EnemyProjectile => groups.enemy_projectiles.push(item),
            ColliderKind::HealthPickup | ColliderKind::WeaponPickup => groups.pickups.push(item),
        }
    }

    for group in [
        &mut groups.player,
        &mut groups.enemies,
        &mut groups.player_projectiles,
        &mut groups.enemy_projectiles,
        &mut groups.pickups,
    ] {
        group.sort_by_key(|c| c.entity.to_bits().get());
    }
    groups
}

impl Resolver<'_> {
    fn resolve_pairs(&mut self, subjects: &[Collidable], others: &[Collidable]) {
        for subject in subjects {
            for other in others {
                if self.spent.contains(&subject.entity) {
                    break;
                }
                if self.spent.contains(&other.entity) || !subject.bounds.overlaps(&other.bounds) {
                    continue;
                }
                let Some(rule) = rule_for(subject.kind, other.kind) else {
                    continue;
                };
                match rule {
                    Rule::Ram => self.ram(subject.entity, other.entity),
                    Rule::Hit => self.hit(subject.entity, other.entity),
                    Rule::Heal => self.heal(subject.entity, other.entity),
                    Rule::Rearm => self.rearm(subject.entity, other.entity),
                }
            }
        }
    }

    fn ram(&mut self, player: Entity, enemy: Entity) {
        let position = self.position(player);
        self.events.push(GameEvent::RamContact {
            damage: self.ram.to_player,
            position,
        });
        self.damage(player, self.ram.to_player);
        if self.ram.to_enemy > 0 {
            self.damage(enemy, self.ram.to_enemy);
        }
    }

    fn hit(&mut self, target: Entity, projectile: Entity) {
        let Ok(archetype) = self
            .world
            .get::<&Projectile>(projectile)
            .map(|p| p.archetype)
        else {
            return;
        };
        self.consume(projectile);

        let position = self.position(target);
        let faction = self.faction(target);
        tracing::trace!(
            ?faction,
            weapon = ?archetype.kind,
            damage = archetype.damage,
            "Projectile hit"
        );
        self.events.push(GameEvent::HitLanded {
            target: faction,
            weapon: archetype.kind,
            damage: archetype.damage,
            position,
        });
        self.damage(target, archetype.damage);
    }

    fn heal(&mut self, player: Entity, pickup: Entity) {
        let Ok(power_up) = self.world.get::<&PowerUp>(pickup).map(|p| *p) else {
            return;
        };
        if let PowerUp::Health { amount } = power_up {
            if let Ok(mut health) = self.world.get::<&mut Health>(player) {
                health.heal(amount);
            }
        }
        self.collect(pickup, power_up);
    }

    fn rearm(&mut self, player: Entity, pickup: Entity) {
        let Ok(power_up) = self.world.get::<&PowerUp>(pickup).map(|p| *p) else {
            return;
        };
        if let PowerUp::Weapon(archetype) = power_up {
            if let Ok(mut armament) = self.world.get::<&mut Armament>(player) {
                armament.weapon = Some(archetype);
            }
            tracing::debug!(
                weapon = ?archetype.kind,
                cooldown_secs = archetype.cooldown_secs,
                "Player picked up weapon"
            );
        }
        self.collect(pickup, power_up);
    }

    fn collect(&mut self, pickup: Entity, power_up: PowerUp) {
        let position = self.position(pickup);
        self.consume(pickup);
        self.stats.pickups_collected += 1;
        self.events.push(GameEvent::PickupCollected {
            kind: power_up.kind(),
            position,
        });
    }

    fn consume(&mut self, entity: Entity) {
        if self.spent.insert(entity) {
            self.despawn_buffer.push(entity);
        }
    }

    /// Apply damage and record a death the first time health reaches zero.
    fn damage(&mut self, entity: Entity, amount: i32) {
        let dead = match self.world.get::<&mut Health>(entity) {
            Ok(mut health) => {
                health.damage(amount);
                health.is_dead()
            }
            Err(_) => return,
        };
        if dead && self.spent.insert(entity) {
            self.record_death(entity);
        }
    }

    fn record_death(&mut self, entity: Entity) {
        let position = self.position(entity);
        let faction = self.faction(entity);
        let class = self.world.get::<&Enemy>(entity).ok().map(|e| e.class);
        let weapon = self
            .world
            .get::<&Armament>(entity)
            .ok()
            .and_then(|a| a.weapon);

        if faction == Faction::Enemy {
            self.despawn_buffer.push(entity);
        }
        self.events.push(GameEvent::EntityDied {
            faction,
            class,
            position,
        });
        self.deaths.push(Death {
            faction,
            class,
            position,
            weapon,
        });
    }

    fn position(&self, entity: Entity) -> Position {
        self.world
            .get::<&Position>(entity)
            .map(|p| *p)
            .unwrap_or_default()
    }

    fn faction(&self, entity: Entity) -> Faction {
        if self.world.get::<&Player>(entity).is_ok() {
            Faction::Player
        } else {
            Faction::Enemy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        use ColliderKind::*;
        assert_eq!(rule_for(Player, Enemy), Some(Rule::Ram));
        assert_eq!(rule_for(Player, EnemyProjectile), Some(Rule::Hit));
        assert_eq!(rule_for(Enemy, PlayerProjectile), Some(Rule::Hit));
        assert_eq!(rule_for(Player, HealthPickup), Some(Rule::Heal));
        assert_eq!(rule_for(Player, WeaponPickup), Some(Rule::Rearm));
    }

    #[test]
    fn test_unknown_pairs_are_ignored() {
        use ColliderKind::*;
        assert_eq!(rule_for(Player, PlayerProjectile), None);
        assert_eq!(rule_for(Enemy, EnemyProjectile), None);
        assert_eq!(rule_for(Enemy, Enemy), None);
        assert_eq!(rule_for(Enemy, HealthPickup), None);
        assert_eq!(rule_for(PlayerProjectile, EnemyProjectile), None);
        assert_eq!(rule_for(WeaponPickup, Player), None);
    }
}
