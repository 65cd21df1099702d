//! Snake module - segment storage
//!
//! Segments are kept head first in a fixed-capacity inline array sized to the
//! grid's cell count, so moving and growing never allocate.

use arrayvec::ArrayVec;

use crate::types::{Cell, GRID_CELLS, GRID_SIZE, MAX_SNAKE_LEN, START_BODY};

/// Ordered snake body, head at index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: ArrayVec<Cell, MAX_SNAKE_LEN>,
}

impl Snake {
    /// Build a snake from head-first segments
    ///
    /// Returns `None` if `segments` is empty, longer than [`MAX_SNAKE_LEN`],
    /// leaves the grid, or visits any cell twice.
    pub fn from_segments(segments: &[Cell]) -> Option<Self> {
        if segments.is_empty() || segments.len() > MAX_SNAKE_LEN {
            return None;
        }

        let mut seen = [false; GRID_CELLS];
        let mut body = ArrayVec::new();
        for &cell in segments {
            if !cell.in_bounds() {
                return None;
            }
            let idx = (cell.y * GRID_SIZE + cell.x) as usize;
            if seen[idx] {
                return None;
            }
            seen[idx] = true;
            body.push(cell);
        }
        Some(Self { body })
    }

    /// The starting three-segment snake
    pub fn starting() -> Self {
        let mut snake = Self {
            body: ArrayVec::new(),
        };
        snake.reset_to(&START_BODY);
        snake
    }

    /// Replace all segments in place
    ///
    /// `segments` must be non-empty and within capacity; callers validate.
    pub(crate) fn reset_to(&mut self, segments: &[Cell]) {
        self.body.clear();
        for &cell in segments.iter().take(MAX_SNAKE_LEN) {
            self.body.push(cell);
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.body.is_full()
    }

    /// Segments, head first
    pub fn segments(&self) -> &[Cell] {
        &self.body
    }

    /// Check if any segment, tail included, occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.iter().any(|&seg| seg == cell)
    }

    /// Move the head to `new_head`, optionally keeping the old tail as a new segment.
    ///
    /// Every segment shifts one slot toward the tail. The shift copies over an
    /// overlapping range; `copy_within` handles that safely.
    ///
    /// Segments are distinct grid cells, so a full snake covers the whole grid
    /// and every candidate head collides before it gets here: growth always
    /// has room.
    pub(crate) fn advance(&mut self, new_head: Cell, grow: bool) {
        if grow {
            let tail = self.tail();
            self.body.push(tail);
        }

        let end = self.body.len();
        self.body.copy_within(0..end - 1, 1);
        self.body[0] = new_head;
    }
}
