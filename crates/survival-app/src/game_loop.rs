//! Game loop thread: runs the simulation engine at 60Hz and publishes
//! snapshots.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel. The latest snapshot is
//! stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use survival_core::commands::InputFrame;
use survival_core::constants::TICK_RATE;
use survival_core::state::ArenaSnapshot;
use survival_sim::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("survival-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<ArenaSnapshot>>,
) {
    tracing::info!(seed = config.seed, "Game loop started");
    let mut engine = SimulationEngine::new(config);
    let mut held = InputFrame::default();
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(frame)) => {
                    // A confirm press survives until the tick that sees it.
                    let confirm = held.confirm || frame.confirm;
                    held = InputFrame { confirm, ..frame };
                }
                Ok(GameLoopCommand::SetArena(arena)) => {
                    if let Err(e) = engine.set_arena_config(*arena) {
                        tracing::warn!(error = %e, "Ignoring arena config");
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.time().tick, "Game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick; confirm is an edge
        let snapshot = engine.tick(&held);
        held.confirm = false;

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survival_core::commands::PlayerIntent;
    use survival_core::config::ArenaConfig;
    use survival_core::enums::GamePhase;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Input(InputFrame::confirm())).unwrap();
        tx.send(GameLoopCommand::Input(
            InputFrame::default().with(PlayerIntent::Fire),
        ))
        .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], GameLoopCommand::Input(f) if f.confirm));
        assert!(matches!(commands[1], GameLoopCommand::Input(f) if f.fire && !f.confirm));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.tick(&InputFrame::confirm());
        for _ in 0..50 {
            engine.tick(&InputFrame::default().with(PlayerIntent::Fire));
        }

        let snapshot = engine.tick(&InputFrame::default());
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_thread_starts_round_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();
        tx.send(GameLoopCommand::Input(InputFrame::confirm())).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut phase = GamePhase::Title;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                phase = snap.phase;
            }
            if phase == GamePhase::Playing {
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(phase, GamePhase::Playing);

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_invalid_arena_does_not_stop_loop() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(SimConfig::default(), latest.clone()).unwrap();

        let mut bad = ArenaConfig::default();
        bad.enemy.activation_delay_secs = (10, 5);
        tx.send(GameLoopCommand::SetArena(Box::new(bad))).unwrap();
        tx.send(GameLoopCommand::Input(InputFrame::confirm())).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut enemies = None;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                if snap.phase == GamePhase::Playing {
                    enemies = Some(snap.enemies.len());
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(enemies, Some(15), "round should start with the default wave");

        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
