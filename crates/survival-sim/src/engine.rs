//! Simulation engine: the round state machine.
//!
//! `SimulationEngine` owns the hecs ECS world, applies player input, runs all
//! systems, and produces `ArenaSnapshot`s. Completely headless, so a whole
//! round can be replayed deterministically from a seed.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use survival_core::commands::InputFrame;
use survival_core::components::{Armament, Enemy, Player, Speed};
use survival_core::config::ArenaConfig;
use survival_core::enums::{Faction, GamePhase};
use survival_core::error::Result;
use survival_core::events::GameEvent;
use survival_core::state::ArenaSnapshot;
use survival_core::types::{Health, SimTime, Velocity};

use crate::loot;
use crate::stats::RoundStats;
use crate::systems;
use crate::systems::collision::RamDamage;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Arena used for the first round.
    pub arena: ArenaConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    arena: ArenaConfig,
    /// Replaces `arena` at the next round reset.
    pending_arena: Option<ArenaConfig>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    stats: RoundStats,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self::with_rng(config.arena, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Create an engine that draws from an already-seeded random source.
    pub fn with_rng(arena: ArenaConfig, rng: ChaCha8Rng) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng,
            arena,
            pending_arena: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            stats: RoundStats::default(),
        }
    }

    /// Use `arena` from the next round reset onward. The round in progress
    /// keeps its configuration. A config that fails validation is rejected
    /// and the previously queued one stays in place.
    pub fn set_arena_config(&mut self, arena: ArenaConfig) -> Result<()> {
        arena.validate()?;
        self.pending_arena = Some(arena);
        Ok(())
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputFrame) -> ArenaSnapshot {
        if input.confirm {
            self.handle_confirm();
        }

        if self.phase == GamePhase::Playing {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.arena.bounds(),
            events,
            &self.stats,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Configuration of the current round.
    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Statistics for the current round.
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    /// Mutable access to the world (for tests that stage exact layouts).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player entity, if alive.
    #[cfg(test)]
    pub fn player(&self) -> Option<Entity> {
        self.world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(entity, _)| entity)
    }

    /// Remove every enemy, leaving the player alone in the arena.
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&Enemy>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in enemies {
            let _ = self.world.despawn(entity);
        }
    }

    /// Spawn an enemy at an exact position, ready to fire immediately.
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        template: &survival_core::config::EnemyTemplate,
        position: survival_core::types::Position,
    ) -> Entity {
        world_setup::spawn_enemy(&mut self.world, &self.arena, template, position, 0.0)
    }

    /// Launch a projectile at an exact position and heading.
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        archetype: survival_core::config::WeaponArchetype,
        owner: Faction,
        position: survival_core::types::Position,
        heading_deg: f64,
    ) -> Entity {
        world_setup::spawn_projectile(&mut self.world, archetype, owner, position, heading_deg)
    }

    /// Confirm starts a round from the title screen and returns to the
    /// title screen after a game over. It is ignored mid-round.
    fn handle_confirm(&mut self) {
        match self.phase {
            GamePhase::Title => self.start_round(),
            GamePhase::GameOver => self.set_phase(GamePhase::Title),
            GamePhase::Playing => {}
        }
    }

    /// Reset all round state and populate a fresh arena.
    fn start_round(&mut self) {
        if let Some(arena) = self.pending_arena.take() {
            self.arena = arena;
        }
        // Only the config handed to `new` can get here unvalidated.
        if let Err(e) = self.arena.validate() {
            tracing::warn!(error = %e, "Arena config rejected, falling back to defaults");
            self.arena = ArenaConfig::default();
        }

        self.world.clear();
        self.despawn_buffer.clear();
        self.time = SimTime::default();
        self.stats = RoundStats::default();

        world_setup::spawn_player(&mut self.world, &self.arena);
        let center = self.arena.bounds().center();
        self.stats.enemies_total = world_setup::spawn_wave(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            center,
            self.time.elapsed_secs,
        );

        tracing::info!(enemies = self.stats.enemies_total, "Round started");
        self.set_phase(GamePhase::Playing);
    }

    /// Freeze the arena once the player is gone.
    fn end_round(&mut self, player: Entity) {
        let _ = self.world.despawn(player);

        for (_entity, (_enemy, speed, vel, armament)) in self
            .world
            .query_mut::<(&Enemy, &mut Speed, &mut Velocity, &mut Armament)>()
        {
            speed.per_tick = 0.0;
            *vel = Velocity::default();
            armament.enabled = false;
        }

        tracing::info!(
            tick = self.time.tick,
            kills = self.stats.enemies_killed,
            total = self.stats.enemies_total,
            "Round over"
        );
        self.set_phase(GamePhase::GameOver);
    }

    fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        tracing::debug!(?from, ?to, "Phase transition");
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputFrame) {
        let bounds = self.arena.bounds();
        let now = self.time.elapsed_secs;

        // 1. Player turn and thrust
        systems::input::run(&mut self.world, input, self.arena.player.turn_rate_deg);
        // 2. Enemy pursuit
        systems::enemy_ai::run(&mut self.world, &bounds);
        // 3. Weapons fire
        systems::fire_control::run(
            &mut self.world,
            now,
            input.fire,
            &mut self.events,
            &mut self.stats,
        );
        // 4. Homing steering, then projectile velocity from heading
        systems::homing::run(&mut self.world);
        systems::movement::orient_projectiles(&mut self.world);
        // 5. Movement integration
        systems::movement::run(&mut self.world);
        // 6. Wrap bodies around the torus
        systems::movement::wrap_bodies(&mut self.world, &bounds);
        // 7. Projectiles past their range or off the arena
        systems::cleanup::expire_projectiles(&self.world, &bounds, &mut self.despawn_buffer);
        systems::cleanup::flush(&mut self.world, &mut self.despawn_buffer);
        // 8. Collisions and damage
        let ram = RamDamage {
            to_player: self.arena.enemy.ram_damage,
            to_enemy: self.arena.enemy.ram_damage_to_enemy,
        };
        let deaths = systems::collision::run(
            &mut self.world,
            ram,
            &mut self.events,
            &mut self.stats,
            &mut self.despawn_buffer,
        );
        // 9. Loot from dead enemies
        for death in deaths.iter().filter(|d| d.faction == Faction::Enemy) {
            self.stats.enemies_killed += 1;
            let loot_drop = loot::roll(&mut self.rng, &self.arena.loot, death.weapon.as_ref());
            tracing::debug!(
                class = ?death.class,
                x = death.position.x,
                y = death.position.y,
                drop = ?loot_drop.map(|d| d.kind()),
                "Enemy destroyed"
            );
            if let Some(power_up) = loot_drop {
                world_setup::spawn_pickup(
                    &mut self.world,
                    power_up,
                    death.position,
                    self.arena.loot.footprint,
                );
                self.events.push(GameEvent::PickupDropped {
                    kind: power_up.kind(),
                    position: death.position,
                });
            }
        }
        // 10. Remove consumed and dead entities
        systems::cleanup::flush(&mut self.world, &mut self.despawn_buffer);
        // 11. Round over once the player is dead
        let dead_player = self
            .world
            .query::<(&Player, &Health)>()
            .iter()
            .find(|(_, (_, health))| health.is_dead())
            .map(|(entity, _)| entity);
        if let Some(player) = dead_player {
            self.end_round(player);
        }
    }
}
