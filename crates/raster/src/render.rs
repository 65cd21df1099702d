//! Frame rendering: maps a `GameState` into a [`PixelBuffer`].
//!
//! This module is pure (no I/O) and allocation-free.

use crate::core::GameState;
use crate::pixel_buffer::PixelBuffer;
use crate::types::{
    Cell, Rgba, BACKGROUND_COLOR, BODY_COLOR, CELL_PX, FOOD_COLOR, GRID_LINE_COLOR, GRID_SIZE,
    HEAD_COLOR,
};

/// Edge length of a drawn square; one pixel short of a cell so neighbours
/// stay visually separated.
pub const SQUARE_PX: u32 = CELL_PX - 1;

/// Top-left pixel of a grid cell
pub fn cell_origin(cell: Cell) -> (i32, i32) {
    (cell.x * CELL_PX as i32, cell.y * CELL_PX as i32)
}

fn draw_cell(buf: &mut PixelBuffer, cell: Cell, color: Rgba) {
    let (px, py) = cell_origin(cell);
    buf.draw_rect(px, py, SQUARE_PX, SQUARE_PX, color);
}

/// Clear the buffer and draw the whole frame.
///
/// Background first, then the segments from head to tail, then the food.
pub fn render_frame(buf: &mut PixelBuffer, game: &GameState) {
    buf.fill(BACKGROUND_COLOR);

    for (i, &segment) in game.snake().segments().iter().enumerate() {
        let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
        draw_cell(buf, segment, color);
    }

    draw_cell(buf, game.food(), FOOD_COLOR);
}

/// Overlay 1px grid lines on whatever the buffer currently holds.
///
/// One vertical line per column boundary and one horizontal line per row
/// boundary; the trailing boundary falls outside the buffer and is clipped.
pub fn draw_grid(buf: &mut PixelBuffer) {
    let width = buf.width();
    let height = buf.height();

    for i in 0..=GRID_SIZE {
        let offset = i * CELL_PX as i32;
        buf.draw_rect(offset, 0, 1, height, GRID_LINE_COLOR);
        buf.draw_rect(0, offset, width, 1, GRID_LINE_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, BUFFER_HEIGHT, BUFFER_WIDTH, DEFAULT_SEED};

    fn frame_for(game: &GameState) -> PixelBuffer {
        let mut buf = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        render_frame(&mut buf, game);
        buf
    }

    #[test]
    fn head_and_body_use_distinct_colors() {
        let game = GameState::from_layout(
            DEFAULT_SEED,
            &[Cell::new(2, 2), Cell::new(1, 2)],
            Direction::Right,
            Cell::new(10, 10),
        )
        .unwrap();
        let buf = frame_for(&game);

        assert_eq!(buf.pixel(40, 40), Some(HEAD_COLOR));
        assert_eq!(buf.pixel(40 + 18, 40 + 18), Some(HEAD_COLOR));
        assert_eq!(buf.pixel(20, 40), Some(BODY_COLOR));
        assert_eq!(buf.pixel(200, 200), Some(FOOD_COLOR));
    }

    #[test]
    fn squares_leave_a_one_pixel_gap() {
        let game = GameState::from_layout(
            DEFAULT_SEED,
            &[Cell::new(0, 0)],
            Direction::Right,
            Cell::new(10, 10),
        )
        .unwrap();
        let buf = frame_for(&game);

        assert_eq!(buf.pixel(18, 0), Some(HEAD_COLOR));
        assert_eq!(buf.pixel(19, 0), Some(BACKGROUND_COLOR));
        assert_eq!(buf.pixel(0, 19), Some(BACKGROUND_COLOR));
    }

    #[test]
    fn food_is_drawn_over_body() {
        // Food may land on the snake; it is drawn last.
        let game = GameState::from_layout(
            DEFAULT_SEED,
            &[Cell::new(3, 3), Cell::new(2, 3)],
            Direction::Right,
            Cell::new(2, 3),
        )
        .unwrap();
        let buf = frame_for(&game);
        assert_eq!(buf.pixel(45, 65), Some(FOOD_COLOR));
    }

    #[test]
    fn grid_lines_cover_boundaries_only() {
        let mut buf = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
        buf.fill(BACKGROUND_COLOR);
        draw_grid(&mut buf);

        assert_eq!(buf.pixel(0, 7), Some(GRID_LINE_COLOR));
        assert_eq!(buf.pixel(20, 133), Some(GRID_LINE_COLOR));
        assert_eq!(buf.pixel(380, 399), Some(GRID_LINE_COLOR));
        assert_eq!(buf.pixel(7, 360), Some(GRID_LINE_COLOR));
        assert_eq!(buf.pixel(10, 10), Some(BACKGROUND_COLOR));
        assert_eq!(buf.pixel(399, 399), Some(BACKGROUND_COLOR));
    }
}
