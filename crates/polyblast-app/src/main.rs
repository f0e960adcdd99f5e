//! polyblast: runs a game headlessly with the scripted pilot.
//!
//! Usage:
//!   polyblast config.txt --frames 1800 --seed 7

use std::process;
use std::time::{Duration, Instant};

use polyblast_app::cli::{self, Command, RunArgs};
use polyblast_app::pilot::ScriptedPilot;
use polyblast_core::config::GameConfig;
use polyblast_core::state::FrameSnapshot;
use polyblast_sim::{Game, GameSettings};

/// The pilot fires this often, in polls.
const FIRE_EVERY: u64 = 15;

/// Progress is logged this often, in simulated frames.
const PROGRESS_EVERY: u64 = 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let run = match cli::parse_args(&args) {
        Ok(Command::Run(run)) => run,
        Ok(Command::Help) => {
            cli::print_usage();
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            cli::print_usage();
            process::exit(1);
        }
    };

    let config = match GameConfig::load(&run.config) {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load config: {e}");
            process::exit(1);
        }
    };

    let last = play(config, &run);
    match serde_json::to_string_pretty(&last) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("failed to serialize final snapshot: {e}");
            process::exit(1);
        }
    }
}

fn play(config: GameConfig, run: &RunArgs) -> FrameSnapshot {
    let mut game = Game::new(config, GameSettings { seed: run.seed });
    let mut pilot = ScriptedPilot::new(FIRE_EVERY, run.frames);

    let frame_duration = frame_duration(config.window.frame_limit);
    let mut next_frame_time = Instant::now();

    let last = game.run(&mut pilot, |snapshot| {
        if snapshot.frame > 0 && snapshot.frame % PROGRESS_EVERY == 0 {
            log::info!(
                "frame {}: score {}, {} entities on screen",
                snapshot.frame,
                snapshot.score,
                snapshot.entities.len()
            );
        }
        if run.realtime {
            next_frame_time += frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else {
                // Running behind; don't try to catch up.
                next_frame_time = now;
            }
        }
    });

    let score = game.score();
    log::info!(
        "final score {}: {} enemies, {} fragments, {} bullets fired, {} deaths",
        score.score,
        score.enemies_destroyed,
        score.small_enemies_destroyed,
        score.bullets_fired,
        score.player_deaths
    );
    last
}

/// Wall-clock budget per frame. A frame limit of 0 means unlimited.
fn frame_duration(frame_limit: u32) -> Duration {
    if frame_limit == 0 {
        Duration::ZERO
    } else {
        Duration::from_nanos(1_000_000_000 / u64::from(frame_limit))
    }
}
