//! gallery: plays one shooting-gallery round with the scripted shooter.
//!
//! Usage:
//!   gallery [--seed N] [--config round.json] [--realtime] [--reaction TICKS]

use std::path::PathBuf;
use std::process;

use gallery_app::autoplay::{play_round, AutoShooter, RoundSummary, DEFAULT_REACTION_TICKS};
use gallery_app::game_loop::TICK_DURATION;
use gallery_app::state::AppState;
use gallery_core::commands::PlayerCommand;
use gallery_core::config::RoundConfig;
use gallery_core::enums::GamePhase;
use gallery_sim::{RoundController, SimConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h" || a == "help") {
        print_usage();
        return;
    }

    let seed = parse_value::<u64>(&args, "--seed").unwrap_or(SimConfig::default().seed);
    let reaction = parse_value::<u32>(&args, "--reaction").unwrap_or(DEFAULT_REACTION_TICKS);
    let realtime = args.iter().any(|a| a == "--realtime");

    let round = match parse_path(&args, "--config") {
        Some(path) => match RoundConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => RoundConfig::default(),
    };

    let bounds = round.view_bounds;
    let engine = match RoundController::new(SimConfig { seed, round }) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut shooter = AutoShooter::new(reaction, bounds);
    let summary = if realtime {
        run_realtime(engine, &mut shooter, seed)
    } else {
        let mut engine = engine;
        play_round(&mut engine, &mut shooter, seed)
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to encode summary: {e}");
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "gallery: shooting gallery round with a scripted shooter\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --config <path>    Round config JSON (optional)\n\
           --reaction <N>     Ticks between shooter actions (default: 15)\n\
           --realtime         Pace the round at 60 ticks per second on the game loop thread\n\
         \n\
         Examples:\n\
         \n\
           gallery --seed 7\n\
           gallery --config rounds/short.json --realtime\n"
    );
}

fn parse_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            match args[i + 1].parse::<T>() {
                Ok(v) => return Some(v),
                Err(_) => {
                    eprintln!("Error: invalid value for {flag}: {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    None
}

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

// --- Realtime mode ---

/// Drive the round on the game loop thread, polling snapshots like a
/// renderer would. Polling can skip ticks, so hit tallies come from
/// whatever snapshots were seen.
fn run_realtime(engine: RoundController, shooter: &mut AutoShooter, seed: u64) -> RoundSummary {
    let state = AppState::new();
    let handle = match state.start_loop(engine) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut summary = RoundSummary::new(seed);
    let mut last_tick = None;
    loop {
        std::thread::sleep(TICK_DURATION);
        let Some(snapshot) = state.snapshot() else {
            continue;
        };
        if last_tick == Some(snapshot.time.tick) {
            continue;
        }
        last_tick = Some(snapshot.time.tick);

        summary.observe(&snapshot);
        if snapshot.phase == GamePhase::GameOver {
            summary.final_score = snapshot.round.score;
            break;
        }
        if let Some(command) = shooter.decide(&snapshot) {
            if let PlayerCommand::Touch { .. } = command {
                if snapshot.round.ammo == 0 {
                    summary.reloads += 1;
                } else {
                    summary.shots += 1;
                }
            }
            if !state.send(command) {
                log::warn!("Game loop stopped before the round ended");
                break;
            }
        }
    }

    state.shutdown();
    if handle.join().is_err() {
        log::error!("Game loop thread panicked");
    }
    summary
}
