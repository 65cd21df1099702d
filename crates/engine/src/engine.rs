//! Engine session - one game plus the pixel buffer it is drawn into.
//!
//! All host operations go through [`Engine`]; rendering happens inside
//! `update()` so the buffer always shows the latest applied tick.

use tracing::{debug, trace};

use crate::core::GameState;
use crate::raster::{draw_grid, render_frame, PixelBuffer};
use crate::types::{Direction, StepOutcome, BUFFER_HEIGHT, BUFFER_WIDTH, DEFAULT_SEED};

/// One game session: state plus its pixel buffer.
///
/// The buffer is allocated on the first [`initialize`](Engine::initialize) and
/// only cleared afterwards, so a pointer from [`buffer_ptr`](Engine::buffer_ptr)
/// stays valid for the life of the session.
#[derive(Debug, Clone)]
pub struct Engine {
    game: GameState,
    pixels: PixelBuffer,
}

impl Engine {
    /// Session with the default food seed. Call [`initialize`](Engine::initialize) before use.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            game: GameState::new(seed),
            pixels: PixelBuffer::empty(),
        }
    }

    /// Session around an existing position, with the buffer allocated and zeroed.
    ///
    /// Useful for replaying or testing a specific layout; a later
    /// [`initialize`](Engine::initialize) still resets to the starting layout.
    pub fn from_game(game: GameState) -> Self {
        Self {
            game,
            pixels: PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT),
        }
    }

    /// Reset the game and clear the buffer to all-zero bytes.
    pub fn initialize(&mut self) {
        self.game.reset();
        self.pixels.ensure_size(BUFFER_WIDTH, BUFFER_HEIGHT);
        self.pixels.clear();
        debug!(seed = self.game.seed(), food = ?self.game.food(), "initialized");
    }

    /// Apply a host direction code.
    ///
    /// Codes outside `0..=3` and reversals are ignored. Returns whether the
    /// heading request was accepted.
    pub fn set_direction_code(&mut self, code: u32) -> bool {
        match Direction::from_code(code) {
            Some(dir) => self.set_direction(dir),
            None => {
                trace!(code, "ignored invalid direction code");
                false
            }
        }
    }

    pub fn set_direction(&mut self, dir: Direction) -> bool {
        let accepted = self.game.set_direction(dir);
        if !accepted {
            trace!(requested = dir.as_str(), "ignored reversal");
        }
        accepted
    }

    /// Advance one tick; `true` if the tick was applied.
    pub fn update(&mut self) -> bool {
        self.tick().is_applied()
    }

    /// Advance one tick and redraw the frame if the snake moved.
    pub fn tick(&mut self) -> StepOutcome {
        let outcome = self.game.step();

        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate => {
                debug!(
                    score = self.game.score(),
                    len = self.game.len(),
                    next_food = ?self.game.food(),
                    "food eaten"
                );
            }
            StepOutcome::HitWall | StepOutcome::HitSelf => {
                debug!(
                    cause = outcome.as_str(),
                    score = self.game.score(),
                    ticks = self.game.ticks(),
                    "game over"
                );
            }
            StepOutcome::AlreadyOver => return outcome,
        }

        if outcome.is_applied() {
            render_frame(&mut self.pixels, &self.game);
        }
        outcome
    }

    /// Overlay grid lines on the current frame.
    pub fn draw_grid(&mut self) {
        draw_grid(&mut self.pixels);
    }

    pub fn buffer_ptr(&self) -> *const u8 {
        self.pixels.as_ptr()
    }

    pub fn buffer_size(&self) -> usize {
        self.pixels.len()
    }

    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn is_game_over(&self) -> bool {
        self.game.game_over()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
