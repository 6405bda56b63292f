//! Survival arena runner.
//!
//! Runs the arena simulation under the built-in autopilot, either headless
//! (as fast as possible) or in real time on the game loop thread.
//!
//! # Usage
//!
//! ```bash
//! # One minute of simulated play, summary on stdout
//! cargo run -p survival-app -- --ticks 3600
//!
//! # Custom arena, fixed seed, JSON summary
//! cargo run -p survival-app -- --config arena.json --seed 7 --json
//!
//! # Real-time loop for ten seconds
//! cargo run -p survival-app -- --realtime --ticks 600
//! ```
//!
//! Logs go to stderr and honour `RUST_LOG`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use survival_app::autopilot::Autopilot;
use survival_app::game_loop::TICK_DURATION;
use survival_app::headless::{self, HeadlessConfig, RunSummary};
use survival_app::state::{AppState, GameLoopCommand};
use survival_core::config::ArenaConfig;
use survival_core::enums::GamePhase;
use survival_core::error::ConfigError;
use survival_sim::SimConfig;

#[derive(Parser)]
#[command(name = "survival")]
#[command(about = "Top-down toroidal arena survival simulation")]
#[command(version)]
struct Cli {
    /// Arena configuration file (JSON); defaults are used for missing fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed for spawn placement and loot
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Number of ticks to run (60 per simulated second)
    #[arg(short, long, default_value = "3600")]
    ticks: u64,

    /// Run on the real-time game loop thread instead of headless
    #[arg(long)]
    realtime: bool,

    /// Stop after the first game over instead of starting a new round
    #[arg(long)]
    once: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let arena = match load_arena(cli.config.as_ref()) {
        Ok(arena) => arena,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if cli.realtime {
        run_realtime(&cli, arena)
    } else {
        Ok(headless::run(&HeadlessConfig {
            seed: cli.seed,
            ticks: cli.ticks,
            arena,
            replay: !cli.once,
        }))
    };

    match result {
        Ok(summary) => {
            print_summary(&summary, cli.json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_arena(path: Option<&PathBuf>) -> Result<ArenaConfig, ConfigError> {
    match path {
        Some(path) => {
            let arena = ArenaConfig::load(path)?;
            tracing::info!(path = %path.display(), "Loaded arena config");
            Ok(arena)
        }
        None => Ok(ArenaConfig::default()),
    }
}

/// Drive the game loop thread with the autopilot for `cli.ticks` ticks of
/// wall-clock time. Snapshots are polled, so kill and shot totals cover the
/// final round only.
fn run_realtime(cli: &Cli, arena: ArenaConfig) -> Result<RunSummary, String> {
    let state = AppState::new();
    state.start(SimConfig {
        seed: cli.seed,
        arena,
    })?;

    let pilot = Autopilot::new(!cli.once);
    let mut summary = RunSummary {
        seed: cli.seed,
        ticks: cli.ticks,
        ..RunSummary::default()
    };
    let mut last_phase = None;
    for _ in 0..cli.ticks {
        let snapshot = state.snapshot();
        if let Some(snap) = snapshot.as_ref() {
            if last_phase != Some(snap.phase) {
                match snap.phase {
                    GamePhase::Playing => summary.rounds_started += 1,
                    GamePhase::GameOver => summary.rounds_lost += 1,
                    GamePhase::Title => {}
                }
            }
            last_phase = Some(snap.phase);
        }
        state.send(GameLoopCommand::Input(pilot.next_input(snapshot.as_ref())))?;
        std::thread::sleep(TICK_DURATION);
    }
    // Let the loop consume the last input before stopping it.
    std::thread::sleep(Duration::from_millis(20));
    let last = state.snapshot();
    state.shutdown()?;

    if let Some(snap) = last {
        summary.final_phase = snap.phase;
        summary.enemies_killed = snap.score.enemies_killed;
        summary.shots_fired = snap.score.shots_fired;
        summary.pickups_collected = snap.score.pickups_collected;
    }
    Ok(summary)
}

fn print_summary(summary: &RunSummary, json: bool) {
    if json {
        match serde_json::to_string_pretty(summary) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!("Failed to serialize summary: {e}"),
        }
        return;
    }
    println!("Seed:              {}", summary.seed);
    println!("Ticks:             {}", summary.ticks);
    println!("Rounds started:    {}", summary.rounds_started);
    println!("Rounds lost:       {}", summary.rounds_lost);
    println!("Enemies killed:    {}", summary.enemies_killed);
    println!("Shots fired:       {}", summary.shots_fired);
    println!("Pickups collected: {}", summary.pickups_collected);
    println!("Final phase:       {:?}", summary.final_phase);
}
