//! Headless runner: ticks the engine as fast as possible under the
//! autopilot and reports what happened.

use serde::Serialize;

use survival_core::config::ArenaConfig;
use survival_core::enums::{Faction, GamePhase};
use survival_core::events::GameEvent;
use survival_core::state::ArenaSnapshot;
use survival_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;

/// Configuration for a headless run.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    pub seed: u64,
    /// Total ticks to run, across all rounds.
    pub ticks: u64,
    pub arena: ArenaConfig,
    /// Start a new round after each game over.
    pub replay: bool,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 3600,
            arena: ArenaConfig::default(),
            replay: true,
        }
    }
}

/// Totals over a headless run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub seed: u64,
    pub ticks: u64,
    pub rounds_started: u32,
    pub rounds_lost: u32,
    pub enemies_killed: u32,
    pub shots_fired: u32,
    pub pickups_collected: u32,
    pub final_phase: GamePhase,
}

pub struct HeadlessRunner {
    engine: SimulationEngine,
    pilot: Autopilot,
    last: Option<ArenaSnapshot>,
    summary: RunSummary,
}

impl HeadlessRunner {
    pub fn new(config: &HeadlessConfig) -> Self {
        Self {
            engine: SimulationEngine::new(SimConfig {
                seed: config.seed,
                arena: config.arena.clone(),
            }),
            pilot: Autopilot::new(config.replay),
            last: None,
            summary: RunSummary {
                seed: config.seed,
                ..RunSummary::default()
            },
        }
    }

    /// Advance one tick and fold its events into the summary.
    pub fn step(&mut self) -> &ArenaSnapshot {
        let input = self.pilot.next_input(self.last.as_ref());
        let snapshot = self.engine.tick(&input);
        self.record(&snapshot);
        self.last.insert(snapshot)
    }

    fn record(&mut self, snapshot: &ArenaSnapshot) {
        let summary = &mut self.summary;
        summary.ticks += 1;
        summary.final_phase = snapshot.phase;
        for event in &snapshot.events {
            match event {
                GameEvent::PhaseChanged {
                    to: GamePhase::Playing,
                    ..
                } => summary.rounds_started += 1,
                GameEvent::PhaseChanged {
                    to: GamePhase::GameOver,
                    ..
                } => summary.rounds_lost += 1,
                GameEvent::EntityDied {
                    faction: Faction::Enemy,
                    ..
                } => summary.enemies_killed += 1,
                GameEvent::ShotFired {
                    faction: Faction::Player,
                    ..
                } => summary.shots_fired += 1,
                GameEvent::PickupCollected { .. } => summary.pickups_collected += 1,
                _ => {}
            }
        }
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Last snapshot produced, if any tick has run.
    pub fn last_snapshot(&self) -> Option<&ArenaSnapshot> {
        self.last.as_ref()
    }
}

/// Run a full headless session.
pub fn run(config: &HeadlessConfig) -> RunSummary {
    let mut runner = HeadlessRunner::new(config);
    for _ in 0..config.ticks {
        runner.step();
    }
    let summary = runner.summary().clone();
    tracing::info!(
        ticks = summary.ticks,
        rounds = summary.rounds_started,
        kills = summary.enemies_killed,
        "Headless run complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_run_starts_a_round() {
        let summary = run(&HeadlessConfig {
            ticks: 120,
            ..HeadlessConfig::default()
        });
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.rounds_started, 1);
        assert_eq!(summary.final_phase, GamePhase::Playing);
        assert!(summary.shots_fired > 0, "autopilot holds fire");
    }

    #[test]
    fn test_headless_run_is_deterministic() {
        let config = HeadlessConfig {
            seed: 7,
            ticks: 1200,
            ..HeadlessConfig::default()
        };
        assert_eq!(run(&config), run(&config));
    }

    #[test]
    fn test_step_exposes_snapshot() {
        let mut runner = HeadlessRunner::new(&HeadlessConfig::default());
        assert!(runner.last_snapshot().is_none());
        let phase = runner.step().phase;
        assert_eq!(phase, GamePhase::Playing);
        assert_eq!(runner.last_snapshot().map(|s| s.time.tick), Some(1));
    }
}
