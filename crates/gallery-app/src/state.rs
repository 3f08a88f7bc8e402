//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use gallery_core::commands::PlayerCommand;
use gallery_core::state::GameStateSnapshot;
use gallery_sim::RoundController;

use crate::game_loop;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the round controller.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` so the state is Sync
/// - `Mutex<Option<...>>` covers state that does not exist before the loop starts
/// - `Arc<Mutex<...>>` shares the latest snapshot with the game loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    /// `None` before the loop is started.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the game loop thread for `engine`. Fails if one is already running.
    pub fn start_loop(&self, engine: RoundController) -> Result<JoinHandle<()>, String> {
        let mut tx_lock = self.command_tx.lock().map_err(|e| e.to_string())?;
        if tx_lock.is_some() {
            return Err("Game loop already running".into());
        }

        let (cmd_tx, handle) =
            game_loop::spawn_game_loop(engine, Arc::clone(&self.latest_snapshot))
                .map_err(|e| format!("Failed to spawn game loop: {}", e))?;
        *tx_lock = Some(cmd_tx);
        Ok(handle)
    }

    /// Forward a player command. Returns false if the loop is not running.
    pub fn send(&self, command: PlayerCommand) -> bool {
        match self.command_tx.lock() {
            Ok(tx) => tx
                .as_ref()
                .is_some_and(|tx| tx.send(GameLoopCommand::PlayerCommand(command)).is_ok()),
            Err(_) => false,
        }
    }

    /// Clone of the most recent snapshot, if any.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|lock| lock.clone())
    }

    /// Ask the game loop to stop.
    pub fn shutdown(&self) {
        if let Ok(mut tx) = self.command_tx.lock() {
            if let Some(tx) = tx.take() {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        }
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
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn test_start_loop_twice_fails() {
        use gallery_sim::SimConfig;

        let state = AppState::new();
        let engine = || RoundController::new(SimConfig::default()).unwrap();
        let handle = state.start_loop(engine()).unwrap();
        assert!(state.start_loop(engine()).is_err());

        assert!(state.send(PlayerCommand::StartRound));
        state.shutdown();
        handle.join().unwrap();
    }

    #[test]
    fn test_send_without_loop_fails() {
        let state = AppState::new();
        assert!(!state.send(PlayerCommand::StartRound));
    }

    #[test]
    fn test_send_and_shutdown_reach_channel() {
        let state = AppState::new();
        let (tx, rx) = mpsc::channel();
        *state.command_tx.lock().unwrap() = Some(tx);

        assert!(state.send(PlayerCommand::StartRound));
        state.shutdown();
        assert!(state.command_tx.lock().unwrap().is_none());

        let received: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert_eq!(received.len(), 2);
        assert!(matches!(
            received[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartRound)
        ));
        assert!(matches!(received[1], GameLoopCommand::Shutdown));
    }
}
