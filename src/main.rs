//! Terminal roguelike runner (default binary).
//!
//! One blocking key read per frame: render, read a key, dispatch it, repeat
//! until `q`. Uses crossterm for input and the framebuffer-based renderer.
//!
//! Logs go to the file named by `ROGUE_LOG_PATH` (filtered by `RUST_LOG`,
//! default `info`); the screen belongs to the game.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_rogue::core::{Game, GameConfig, MoveOutcome};
use tui_rogue::input::{handle_key_event, should_quit};
use tui_rogue::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_rogue::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    info!(
        seed = config.seed,
        capacity = config.room_capacity,
        doors_passable = config.doors_passable,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "session ended with error");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let (width, height) = terminal::size().unwrap_or((DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT));
    let mut game = Game::new(config, width, height);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(width, height);
    let mut moves = 0u32;

    loop {
        // Render.
        let (w, h) = terminal::size().unwrap_or((width, height));
        let viewport = Viewport::new(w, h);
        view.render_into(&game, viewport, &mut fb);
        term.draw_swap(&mut fb, view.cursor(&game, viewport))?;

        // Block until the next event.
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    info!(moves, "quit");
                    return Ok(());
                }
                if let Some(ch) = handle_key_event(key) {
                    if game.handle_input(ch) == MoveOutcome::Moved {
                        moves += 1;
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
