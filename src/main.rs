//! Blockfall runner (default binary).
//!
//! Interactive play in the terminal, or `--headless <PIECES>` to let the
//! autoplayer place a fixed number of pieces and print the final snapshot
//! as JSON.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::info;

use blockfall::config::load_config;
use blockfall::core::{GameConfig, GameState};
use blockfall::engine::{autoplay_pieces, autoplay_step};
use blockfall::input::{handle_key_event, is_autoplay_toggle, should_quit};
use blockfall::logging::{init_file_logging, init_stderr_logging, DEFAULT_LOG_FILE};
use blockfall::term::{FrameBuffer, GameView, PanelStatus, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

/// Time between two autoplayer placements in interactive mode
const AUTOPLAY_PIECE_MS: u32 = 150;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle for the terminal")]
struct Args {
    /// TOML config file (overrides $BLOCKFALL_CONFIG and ./blockfall.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RNG seed for reproducible piece sequences
    #[arg(long)]
    seed: Option<u32>,

    /// Start with the autoplayer switched on
    #[arg(long)]
    autoplay: bool,

    /// Place this many pieces with the autoplayer, print the final state and exit
    #[arg(long, value_name = "PIECES")]
    headless: Option<u32>,

    /// Log file for interactive runs
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match (&args.log_file, args.headless) {
        (Some(path), _) => init_file_logging(path)?,
        (None, Some(_)) => init_stderr_logging()?,
        (None, None) => init_file_logging(Path::new(DEFAULT_LOG_FILE))?,
    }

    let mut config = load_config(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if config.seed.is_none() {
        config.seed = Some(clock_seed());
    }
    info!(seed = ?config.seed, width = config.width, height = config.height, "starting");

    match args.headless {
        Some(pieces) => run_headless(config, pieces),
        None => {
            let mut term = TerminalRenderer::new();
            term.enter()?;
            let result = run(&mut term, config, args.autoplay);
            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run_headless(config: GameConfig, pieces: u32) -> Result<()> {
    let weights = config.weights;
    let mut game_state = GameState::new(config)?;
    game_state.start();

    let placed = autoplay_pieces(&mut game_state, &weights, pieces);
    info!(placed, score = game_state.score(), lines = game_state.lines(), "headless run done");

    let json = serde_json::to_string_pretty(&game_state.snapshot())
        .context("failed to serialize snapshot")?;
    println!("{json}");
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig, autoplay: bool) -> Result<()> {
    let weights = config.weights;
    let mut game_state = GameState::new(config)?;
    game_state.start();

    let view = GameView::default();
    let mut status = PanelStatus { autoplay };
    let mut fb = FrameBuffer::new(0, 0);

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_tick = Instant::now();
    let mut autoplay_timer_ms = 0u32;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state.snapshot(), status, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                if is_autoplay_toggle(key) {
                    status.autoplay = !status.autoplay;
                    info!(autoplay = status.autoplay, "autoplay toggled");
                } else if let Some(action) = handle_key_event(key) {
                    game_state.apply_action(action);
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed < frame {
            continue;
        }
        last_tick = Instant::now();
        let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;

        if status.autoplay {
            autoplay_timer_ms = autoplay_timer_ms.saturating_add(elapsed_ms);
            if autoplay_timer_ms >= AUTOPLAY_PIECE_MS {
                autoplay_timer_ms = 0;
                autoplay_step(&mut game_state, &weights);
            }
        } else {
            game_state.tick(elapsed_ms);
        }
    }
}
