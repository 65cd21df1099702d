//! Terminal Snake runner (default binary).
//!
//! Drives the engine the way an embedding host would: paces `update()` on a
//! fixed tick, forwards key presses as direction codes, and shows the RGBA
//! buffer downsampled to terminal cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use pixel_snake::config::HostConfig;
use pixel_snake::engine::Engine;
use pixel_snake::input::{handle_key_event, should_quit, HostCommand};
use pixel_snake::logging;
use pixel_snake::term::{FrameBuffer, HudState, PixelView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = HostConfig::from_env();
    if let Some(path) = config.log_path.as_deref() {
        logging::init_file(path)?;
    }
    info!(tick_ms = config.tick_ms, grid = config.show_grid, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &HostConfig) -> Result<()> {
    let mut engine = Engine::new();
    engine.initialize();

    let view = PixelView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut paused = false;
    let mut grid = config.show_grid;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let hud = HudState {
            score: engine.score(),
            length: engine.game().len() as u32,
            game_over: engine.is_game_over(),
            paused,
            grid,
        };
        view.render_into(engine.pixels(), &hud, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = engine.score(), "quit");
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(cmd @ HostCommand::Turn(_)) => {
                            if let Some(code) = cmd.direction_code() {
                                engine.set_direction_code(code);
                            }
                        }
                        Some(HostCommand::Restart) => {
                            info!(score = engine.score(), "restart");
                            engine.initialize();
                            paused = false;
                            last_tick = Instant::now();
                        }
                        Some(HostCommand::Pause) => paused = !paused,
                        Some(HostCommand::ToggleGrid) => {
                            grid = !grid;
                            if grid {
                                engine.draw_grid();
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if !paused && !engine.is_game_over() {
                let outcome = engine.tick();
                if grid {
                    engine.draw_grid();
                }
                if !outcome.is_applied() {
                    info!(
                        cause = outcome.as_str(),
                        score = engine.score(),
                        "game over"
                    );
                }
            }
        }
    }
}
