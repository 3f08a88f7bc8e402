//! Game loop thread: runs the round controller at the tick rate and
//! publishes snapshots.
//!
//! The controller is built by the caller (so config errors surface before
//! any thread starts) and moved into the loop thread. Commands arrive via
//! an `mpsc` channel. The latest snapshot is stored in shared state for
//! polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use gallery_core::constants::TICK_RATE;
use gallery_core::state::GameStateSnapshot;
use gallery_sim::RoundController;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the host to use and the thread handle.
pub fn spawn_game_loop(
    engine: RoundController,
    latest_snapshot: std::sync::Arc<Mutex<Option<GameStateSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("gallery-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// Drain pending commands into the controller.
/// Returns false when the loop should stop.
fn drain_commands(engine: &mut RoundController, cmd_rx: &mpsc::Receiver<GameLoopCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                engine.queue_command(cmd);
            }
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: RoundController,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            log::info!("Game loop stopping at tick {}", engine.time().tick);
            return;
        }

        // 2. Advance one tick
        let snapshot = engine.tick();

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
            // Too far behind; reset to avoid a catch-up spiral
            log::warn!("Game loop fell behind; resetting tick clock");
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gallery_core::commands::PlayerCommand;
    use gallery_core::enums::GamePhase;
    use gallery_sim::SimConfig;

    fn engine() -> RoundController {
        RoundController::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRound))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut engine = engine();
        assert!(!drain_commands(&mut engine, &rx));

        // The command queued before Shutdown still reaches the controller.
        let snap = engine.tick();
        assert_eq!(snap.phase, GamePhase::Active);
    }

    #[test]
    fn test_game_loop_runs_and_shuts_down() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(engine(), Arc::clone(&latest)).unwrap();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRound))
            .unwrap();
        std::thread::sleep(Duration::from_millis(100));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(engine(), latest).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_snapshot_serialization_under_10ms() {
        let mut engine = engine();
        engine.queue_command(PlayerCommand::StartRound);

        // Run enough ticks to populate targets
        for _ in 0..600 {
            engine.tick();
        }

        let snapshot = engine.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(10),
            "Snapshot serialization took {:?}, should be <10ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
