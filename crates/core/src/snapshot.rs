use arrayvec::ArrayVec;

use crate::types::{Cell, Direction, MAX_SNAKE_LEN, START_DIRECTION};

/// Plain-data copy of a game, suitable for hosts and tracing.
///
/// Reuse one snapshot with [`GameState::snapshot_into`](crate::GameState::snapshot_into)
/// to capture frames without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Segments, head first
    pub body: ArrayVec<Cell, MAX_SNAKE_LEN>,
    pub direction: Direction,
    pub food: Cell,
    pub score: u32,
    pub game_over: bool,
    pub ticks: u32,
    pub seed: u32,
    pub rng_state: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.body.clear();
        self.direction = START_DIRECTION;
        self.food = Cell::default();
        self.score = 0;
        self.game_over = false;
        self.ticks = 0;
        self.seed = 0;
        self.rng_state = 0;
    }

    pub fn head(&self) -> Option<Cell> {
        self.body.first().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            body: ArrayVec::new(),
            direction: START_DIRECTION,
            food: Cell::default(),
            score: 0,
            game_over: false,
            ticks: 0,
            seed: 0,
            rng_state: 0,
        }
    }
}
