//! Application state shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use survival_core::commands::InputFrame;
use survival_core::config::ArenaConfig;
use survival_core::state::ArenaSnapshot;
use survival_sim::SimConfig;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Replace the held input. `confirm` is applied to a single tick.
    Input(InputFrame),
    /// Arena configuration for the next round.
    SetArena(Box<ArenaConfig>),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that does not exist before `start`
/// - `Arc<Mutex<...>>` holds the latest snapshot, shared with the loop thread
pub struct AppState {
    /// Channel sender to the game loop thread. `None` before `start`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<ArenaSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
    loop_handle: Mutex<Option<std::thread::JoinHandle<()>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
            loop_handle: Mutex::new(None),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the game loop thread if it is not already running.
    pub fn start(&self, config: SimConfig) -> Result<(), String> {
        let mut running = self.running.lock().map_err(|e| e.to_string())?;
        if *running {
            return Err("Simulation already running".into());
        }

        let (cmd_tx, handle) = game_loop::spawn_game_loop(config, self.latest_snapshot.clone())
            .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

        *self.command_tx.lock().map_err(|e| e.to_string())? = Some(cmd_tx);
        *self.loop_handle.lock().map_err(|e| e.to_string())? = Some(handle);
        *running = true;
        Ok(())
    }

    /// Forward a command to the game loop thread.
    pub fn send(&self, command: GameLoopCommand) -> Result<(), String> {
        let tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        let tx = tx_lock
            .as_ref()
            .ok_or_else(|| "Simulation not started".to_string())?;
        tx.send(command)
            .map_err(|_| "Game loop thread has stopped".to_string())
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<ArenaSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }

    /// Stop the game loop thread and wait for it to exit.
    pub fn shutdown(&self) -> Result<(), String> {
        if let Some(tx) = self.command_tx.lock().map_err(|e| e.to_string())?.take() {
            // The loop also exits on disconnect, so a failed send is fine.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }
        if let Some(handle) = self.loop_handle.lock().map_err(|e| e.to_string())?.take() {
            handle
                .join()
                .map_err(|_| "Game loop thread panicked".to_string())?;
        }
        *self.running.lock().map_err(|e| e.to_string())? = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        let err = state
            .send(GameLoopCommand::Input(InputFrame::confirm()))
            .unwrap_err();
        assert!(err.contains("not started"));
    }

    #[test]
    fn test_shutdown_without_start_is_ok() {
        let state = AppState::new();
        state.shutdown().unwrap();
    }
}
