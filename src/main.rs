//! Gesture Invaders entry point
//!
//! Drives the game from a recorded sensor session (JSON lines, one frame per
//! line, `null` for a tick without data) or from the scripted demo pilot,
//! and renders snapshots to the terminal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use gesture_invaders::consts::SENSOR_FPS;
use gesture_invaders::demo::DemoPilot;
use gesture_invaders::input::SensorFrame;
use gesture_invaders::renderer::{RenderSnapshot, render_text};
use gesture_invaders::{FileScoreStore, Game, GameConfig, Handedness, InvadersError, LatchPolicy, Result};

#[derive(Parser, Debug)]
#[command(name = "gesture-invaders")]
#[command(about = "Shoot descending invaders by opening and closing your hand")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    rows: Option<usize>,
    #[arg(long)]
    cols: Option<usize>,
    /// Frames per move cycle at game start
    #[arg(long)]
    cadence: Option<u32>,
    /// Max invaders spawned per cycle at game start
    #[arg(long)]
    max_spawns: Option<u32>,
    #[arg(long)]
    kill_score: Option<u32>,
    /// Ticks the game-over screen is held
    #[arg(long)]
    game_over_hold: Option<u32>,
    #[arg(long, value_enum)]
    hand: Option<Handedness>,
    /// What Lasso/Unknown hand samples do to a pending open
    #[arg(long, value_enum)]
    latch: Option<LatchPolicy>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    high_score_file: Option<PathBuf>,
    /// Recorded sensor frames (JSON lines) to replay instead of the demo pilot
    #[arg(long)]
    frames: Option<PathBuf>,
    /// Length of the demo run in ticks
    #[arg(long, default_value_t = 1800)]
    demo_ticks: u64,
    /// Print a frame every N ticks
    #[arg(long, default_value_t = 30)]
    render_every: u64,
    /// Pace ticks at the sensor frame rate
    #[arg(long)]
    realtime: bool,
    /// Write the effective config to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(cadence) = self.cadence {
            config.initial_cadence = cadence;
        }
        if let Some(max_spawns) = self.max_spawns {
            config.initial_max_spawns = max_spawns;
        }
        if let Some(kill_score) = self.kill_score {
            config.kill_score = kill_score;
        }
        if let Some(hold) = self.game_over_hold {
            config.game_over_hold = hold;
        }
        if let Some(hand) = self.hand {
            config.hand = hand;
        }
        if let Some(latch) = self.latch {
            config.latch_policy = latch;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(path) = &self.high_score_file {
            config.high_score_path = path.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.game_config()?;

    if let Some(path) = &cli.write_config {
        return config.save(path);
    }

    log::info!("Gesture Invaders starting...");
    let store = FileScoreStore::new(config.high_score_path.clone());
    let mut game = Game::new(config, store)?;

    match &cli.frames {
        Some(path) => replay(&mut game, path, &cli)?,
        None => demo(&mut game, &cli),
    }

    game.shutdown();
    let session = game.session();
    println!(
        "Finished after {} ticks: score {}, high score {}",
        session.time_ticks, session.score, session.high_score
    );
    Ok(())
}

/// Replay a JSON-lines sensor recording
fn replay(game: &mut Game<FileScoreStore>, path: &Path, cli: &Cli) -> Result<()> {
    let reader = BufReader::new(File::open(path)?);
    log::info!("Replaying sensor frames from {}", path.display());

    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let frame: Option<SensorFrame> = if line.trim().is_empty() {
            None
        } else {
            serde_json::from_str(&line).map_err(|e| {
                InvadersError::Config(format!("{}:{}: bad sensor frame: {}", path.display(), n + 1, e))
            })?
        };
        let snapshot = game.on_frame(frame.as_ref());
        present(&snapshot, n as u64 + 1, cli);
    }
    Ok(())
}

/// Let the scripted pilot play
fn demo(game: &mut Game<FileScoreStore>, cli: &Cli) {
    let mut pilot = DemoPilot::new(game.session().config.hand);
    log::info!("Running demo pilot for {} ticks", cli.demo_ticks);

    for n in 1..=cli.demo_ticks {
        let frame = pilot.next_frame(&game.session().grid);
        let snapshot = game.on_frame(Some(&frame));
        present(&snapshot, n, cli);
    }
}

fn present(snapshot: &RenderSnapshot, tick: u64, cli: &Cli) {
    if cli.render_every > 0 && tick % cli.render_every == 0 {
        println!("tick {}\n{}", tick, render_text(snapshot));
    }
    if cli.realtime {
        std::thread::sleep(Duration::from_secs(1) / SENSOR_FPS);
    }
}
