//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the food placer and scoring.
//! It handles heading changes, the per-tick transition, and game lifecycle.

use crate::rng::FoodPlacer;
use crate::snake::Snake;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    direction: Direction,
    food: Cell,
    food_placer: FoodPlacer,
    score: u32,
    game_over: bool,
    /// Number of applied ticks since the last reset.
    ticks: u32,
}

impl GameState {
    /// Create a new game with the given food seed, in its starting layout
    pub fn new(seed: u32) -> Self {
        let mut food_placer = FoodPlacer::new(seed);
        let food = food_placer.next_food();

        Self {
            snake: Snake::starting(),
            direction: START_DIRECTION,
            food,
            food_placer,
            score: 0,
            game_over: false,
            ticks: 0,
        }
    }

    /// Build a game from an arbitrary position.
    ///
    /// `body` is head first. Returns `None` unless the body is non-empty, fits
    /// within [`MAX_SNAKE_LEN`], has no two segments on the same cell, and
    /// every segment and the food lie on the grid.
    /// The food placer starts from `seed` and is used for the next placement.
    pub fn from_layout(seed: u32, body: &[Cell], direction: Direction, food: Cell) -> Option<Self> {
        if !food.in_bounds() {
            return None;
        }
        let snake = Snake::from_segments(body)?;

        Some(Self {
            snake,
            direction,
            food,
            food_placer: FoodPlacer::new(seed),
            score: 0,
            game_over: false,
            ticks: 0,
        })
    }

    /// Return to the starting layout.
    ///
    /// The food sequence restarts from the original seed, so every reset game
    /// replays identically for identical inputs.
    pub fn reset(&mut self) {
        self.snake.reset_to(&START_BODY);
        self.direction = START_DIRECTION;
        self.score = 0;
        self.game_over = false;
        self.ticks = 0;
        self.food_placer.reseed();
        self.food = self.food_placer.next_food();
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn seed(&self) -> u32 {
        self.food_placer.seed()
    }

    /// Change heading.
    ///
    /// A direct reversal of the current heading is ignored. Returns whether the
    /// request was accepted (re-requesting the current heading is accepted).
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Advance the game by one tick.
    ///
    /// Order matters: the boundary check runs before the self-collision scan,
    /// and both run against the pre-move body. The scan includes the tail
    /// even though it would vacate its cell during this tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::AlreadyOver;
        }

        let candidate = self.snake.head().step(self.direction);

        if !candidate.in_bounds() {
            self.game_over = true;
            return StepOutcome::HitWall;
        }

        if self.snake.occupies(candidate) {
            self.game_over = true;
            return StepOutcome::HitSelf;
        }

        let ate = candidate == self.food;
        self.snake.advance(candidate, ate);
        self.ticks = self.ticks.wrapping_add(1);

        if ate {
            self.score = self.score.saturating_add(SCORE_PER_FOOD);
            self.food = self.food_placer.next_food();
            return StepOutcome::Ate;
        }

        StepOutcome::Moved
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.body.clear();
        for &cell in self.snake.segments() {
            out.body.push(cell);
        }
        out.direction = self.direction;
        out.food = self.food;
        out.score = self.score;
        out.game_over = self.game_over;
        out.ticks = self.ticks;
        out.seed = self.food_placer.seed();
        out.rng_state = self.food_placer.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
