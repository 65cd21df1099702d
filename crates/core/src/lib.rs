//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, state management, and food placement.
//! It has **zero dependencies** on rendering, wasm exports, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Unit tests for every rule and edge case
//! - **Portable**: Runs natively and inside a `wasm32` module alike
//! - **Fast**: Ticks never allocate; the snake lives in fixed-capacity storage
//!
//! # Module Structure
//!
//! - [`game_state`]: Snake, heading, food, score and the per-tick transition
//! - [`snake`]: Head-first segment storage with an overlap-safe shift
//! - [`rng`]: Seeded LCG and food placement
//! - [`snapshot`]: Plain-data copies of the game for hosts and tracing
//!
//! # Game Rules
//!
//! - **Grid**: 20x20 cells; leaving it ends the game
//! - **Self collision**: checked against the body *before* it moves, tail included
//! - **Reversal**: turning straight back is ignored
//! - **Food**: +10 points and one extra segment; the next food is placed uniformly
//!   over the whole grid, occupied cells included
//!
//! # Example
//!
//! ```
//! use pixel_snake_core::GameState;
//! use pixel_snake_types::{Direction, StepOutcome, DEFAULT_SEED};
//!
//! let mut game = GameState::new(DEFAULT_SEED);
//! assert_eq!(game.len(), 3);
//!
//! game.set_direction(Direction::Up);
//! assert!(game.step().is_applied());
//!
//! // Reversals are ignored.
//! assert!(!game.set_direction(Direction::Down));
//! assert_eq!(game.direction(), Direction::Up);
//!
//! // Run into the top wall.
//! while game.step() != StepOutcome::HitWall {}
//! assert!(game.game_over());
//! ```

pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use pixel_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use rng::{FoodPlacer, SimpleRng};
pub use snake::Snake;
pub use snapshot::GameSnapshot;
