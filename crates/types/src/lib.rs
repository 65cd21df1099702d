//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (game logic, rasterizer, wasm exports, terminal host).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed square grid:
//!
//! - **Size**: 20x20 cells (indexed 0-19 on both axes)
//! - **Cell**: 20x20 pixels
//! - **Pixel buffer**: 400x400 RGBA8, 640 000 bytes, row-major top-to-bottom
//!
//! # Direction Codes
//!
//! Hosts pass directions as plain integers:
//!
//! | Code | Direction |
//! |------|-----------|
//! | 0 | Up |
//! | 1 | Right |
//! | 2 | Down |
//! | 3 | Left |
//!
//! Any other code is rejected by [`Direction::from_code`].
//!
//! # Examples
//!
//! ```
//! use pixel_snake_types::{Cell, Direction, GRID_SIZE};
//!
//! let dir = Direction::from_code(1).unwrap();
//! assert_eq!(dir, Direction::Right);
//! assert_eq!(dir.opposite(), Direction::Left);
//! assert_eq!(Direction::from_code(7), None);
//!
//! let next = Cell::new(3, 4).step(Direction::Up);
//! assert_eq!(next, Cell::new(3, 3));
//! assert!(next.in_bounds());
//! assert!(!Cell::new(GRID_SIZE, 0).in_bounds());
//! ```

/// Grid width and height in cells
pub const GRID_SIZE: i32 = 20;

/// Total number of cells on the grid
pub const GRID_CELLS: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Maximum number of snake segments.
///
/// Equal to the number of grid cells: a longer snake cannot exist.
pub const MAX_SNAKE_LEN: usize = GRID_CELLS;

/// Edge length of one grid cell in pixels
pub const CELL_PX: u32 = 20;

/// Pixel buffer width
pub const BUFFER_WIDTH: u32 = GRID_SIZE as u32 * CELL_PX;

/// Pixel buffer height
pub const BUFFER_HEIGHT: u32 = GRID_SIZE as u32 * CELL_PX;

/// Bytes per pixel (RGBA8)
pub const BYTES_PER_PIXEL: usize = 4;

/// Pixel buffer length in bytes (400 * 400 * 4)
pub const BUFFER_LEN: usize = BUFFER_WIDTH as usize * BUFFER_HEIGHT as usize * BYTES_PER_PIXEL;

/// Points awarded per food item
pub const SCORE_PER_FOOD: u32 = 10;

/// Default seed of the food placement generator
pub const DEFAULT_SEED: u32 = 42;

/// Suggested host tick cadence in milliseconds
pub const TICK_MS: u32 = 150;

/// Snake layout after initialization, head first
pub const START_BODY: [Cell; 3] = [Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)];

/// Heading after initialization
pub const START_DIRECTION: Direction = Direction::Right;

/// Dark, opaque frame background
pub const BACKGROUND_COLOR: Rgba = Rgba::opaque(18, 18, 28);

/// Snake head (brighter than the body)
pub const HEAD_COLOR: Rgba = Rgba::opaque(120, 240, 120);

/// Snake body segments
pub const BODY_COLOR: Rgba = Rgba::opaque(40, 170, 70);

/// Food item
pub const FOOD_COLOR: Rgba = Rgba::opaque(230, 60, 60);

/// Faint grid overlay lines
pub const GRID_LINE_COLOR: Rgba = Rgba::opaque(44, 44, 60);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_geometry_matches_grid() {
        assert_eq!(BUFFER_WIDTH, 400);
        assert_eq!(BUFFER_HEIGHT, 400);
        assert_eq!(BUFFER_LEN, 640_000);
        assert_eq!(MAX_SNAKE_LEN, 400);
    }

    #[test]
    fn direction_codes_round_trip() {
        for code in 0..4 {
            let dir = Direction::from_code(code).unwrap();
            assert_eq!(dir.code(), code);
        }
        assert_eq!(Direction::from_code(4), None);
        assert_eq!(Direction::from_code(u32::MAX), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn start_body_is_contiguous_and_faces_right() {
        for pair in START_BODY.windows(2) {
            assert_eq!(pair[1].step(START_DIRECTION), pair[0]);
        }
    }
}

/// Snake heading
///
/// The numeric codes are part of the host ABI:
/// `Up = 0`, `Right = 1`, `Down = 2`, `Left = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions in code order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Parse a host direction code
    ///
    /// Returns `None` for anything outside `0..=3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_code(0), Some(Direction::Up));
    /// assert_eq!(Direction::from_code(3), Some(Direction::Left));
    /// assert_eq!(Direction::from_code(4), None);
    /// ```
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Direction::Up),
            1 => Some(Direction::Right),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            _ => None,
        }
    }

    /// Host direction code
    pub fn code(&self) -> u32 {
        match self {
            Direction::Up => 0,
            Direction::Right => 1,
            Direction::Down => 2,
            Direction::Left => 3,
        }
    }

    /// The 180° reversal of this heading
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit vector in grid coordinates (y grows downwards)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "right" | "r", "down" | "d", "left" | "l"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "right" | "r" => Some(Direction::Right),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        }
    }
}

/// A grid cell coordinate
///
/// Coordinates are signed so that a candidate head one step past the edge
/// (e.g. `x = -1`) is representable and can be rejected by [`Cell::in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`
    pub fn step(&self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check if the cell lies on the grid
    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }
}

/// 32-bit RGBA color, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Channel bytes in buffer order (R, G, B, A)
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        }
    }
}

/// Result of advancing the game by one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved one cell
    Moved,
    /// The snake moved onto the food, grew, and scored
    Ate,
    /// The candidate head left the grid; the game is now over
    HitWall,
    /// The candidate head hit a current segment; the game is now over
    HitSelf,
    /// The game was already over; nothing changed
    AlreadyOver,
}

impl StepOutcome {
    /// Whether the tick was applied (the boolean `update()` result)
    pub fn is_applied(&self) -> bool {
        matches!(self, StepOutcome::Moved | StepOutcome::Ate)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepOutcome::Moved => "moved",
            StepOutcome::Ate => "ate",
            StepOutcome::HitWall => "hitWall",
            StepOutcome::HitSelf => "hitSelf",
            StepOutcome::AlreadyOver => "alreadyOver",
        }
    }
}
