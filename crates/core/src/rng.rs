//! RNG module - deterministic food placement
//!
//! Food is placed by drawing two independent uniform integers in `[0, GRID_SIZE)`
//! from a seeded LCG, x first, then y. Placement never looks at the snake, so
//! food may land on an occupied cell.
//!
//! The generator is deterministic across runs so that games can be replayed
//! tick-for-tick from the same seed and input sequence.

use crate::types::{Cell, DEFAULT_SEED, GRID_SIZE};

/// 32-bit linear congruential generator.
///
/// `state' = state * 1664525 + 1013904223 (mod 2^32)`, the Numerical Recipes
/// parameters. A zero seed is mapped to 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    const MUL: u32 = 1_664_525;
    const INC: u32 = 1_013_904_223;

    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(Self::MUL).wrapping_add(Self::INC);
        self.state
    }

    /// Next value reduced into `[0, bound)`. `bound` must be non-zero.
    pub fn next_range(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Food position generator
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    seed: u32,
    rng: SimpleRng,
}

impl FoodPlacer {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Restart the sequence from the original seed
    pub fn reseed(&mut self) {
        self.rng = SimpleRng::new(self.seed);
    }

    /// Draw the next food cell
    pub fn next_food(&mut self) -> Cell {
        let x = self.rng.next_range(GRID_SIZE as u32) as i32;
        let y = self.rng.next_range(GRID_SIZE as u32) as i32;
        Cell::new(x, y)
    }

    /// Preview the next food cell without consuming it
    pub fn peek(&self) -> Cell {
        self.clone().next_food()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current RNG state (for replaying a game from a snapshot)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for FoodPlacer {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
