//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::fs::File;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn, Level};

use tui_2048::core::GameState;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::session::{AppConfig, JsonFileStore, Session};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::BOARD_SIZE;

/// How long to wait for input before redrawing the clock.
const POLL_MS: u64 = 250;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file when `TUI2048_LOG_PATH` is set; stdout belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn open_store(config: &AppConfig) -> JsonFileStore {
    match JsonFileStore::open(&config.state_path) {
        Ok(store) => store,
        Err(e) => {
            warn!(
                path = %config.state_path.display(),
                error = %e,
                "preferences unreadable, starting from defaults"
            );
            JsonFileStore::empty(&config.state_path)
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let game = GameState::new(BOARD_SIZE, config.seed)?;
    let mut session = Session::new(game, open_store(config));
    info!(seed = config.seed, best = session.best(), "tui-2048 started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = session.snapshot(Instant::now());
    let poll = Duration::from_millis(POLL_MS);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(Instant::now(), &mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(poll)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    break;
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                let cues = session.apply(action, Instant::now());
                if cues.iter().any(|c| c.is_audible()) {
                    term.bell()?;
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }

    info!(
        score = session.game().score(),
        best = session.best(),
        moves = session.moves(),
        path = %session.store().path().display(),
        "tui-2048 exiting"
    );
    Ok(())
}
