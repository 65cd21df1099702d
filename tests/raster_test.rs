//! Pixel-level checks of rendered frames.

use pixel_snake::core::GameState;
use pixel_snake::raster::{draw_grid, render_frame, PixelBuffer, SQUARE_PX};
use pixel_snake::types::{
    Cell, Direction, Rgba, BACKGROUND_COLOR, BODY_COLOR, BUFFER_HEIGHT, BUFFER_LEN, BUFFER_WIDTH,
    FOOD_COLOR, GRID_LINE_COLOR, HEAD_COLOR,
};

fn render(game: &GameState) -> PixelBuffer {
    let mut buf = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    render_frame(&mut buf, game);
    buf
}

fn count(buf: &PixelBuffer, color: Rgba) -> usize {
    buf.as_bytes()
        .chunks_exact(4)
        .filter(|px| *px == color.to_bytes())
        .count()
}

#[test]
fn starting_frame_has_expected_coverage() {
    let game = GameState::new(42);
    let buf = render(&game);
    assert_eq!(buf.len(), BUFFER_LEN);

    let square = (SQUARE_PX * SQUARE_PX) as usize;
    assert_eq!(count(&buf, HEAD_COLOR), square);
    assert_eq!(count(&buf, BODY_COLOR), 2 * square);
    assert_eq!(count(&buf, FOOD_COLOR), square);
    assert_eq!(
        count(&buf, BACKGROUND_COLOR),
        (BUFFER_WIDTH * BUFFER_HEIGHT) as usize - 4 * square
    );
}

#[test]
fn squares_leave_a_one_pixel_gap() {
    let game = GameState::new(42);
    let buf = render(&game);

    // Head (10, 10) covers pixels 200..=218 on both axes.
    assert_eq!(buf.pixel(200, 200), Some(HEAD_COLOR));
    assert_eq!(buf.pixel(218, 218), Some(HEAD_COLOR));
    assert_eq!(buf.pixel(219, 205), Some(BACKGROUND_COLOR));
    assert_eq!(buf.pixel(205, 219), Some(BACKGROUND_COLOR));

    // Body (9, 10) ends one pixel before the head.
    assert_eq!(buf.pixel(198, 200), Some(BODY_COLOR));
    assert_eq!(buf.pixel(199, 200), Some(BACKGROUND_COLOR));
}

#[test]
fn alpha_is_opaque_everywhere() {
    let buf = render(&GameState::new(42));
    assert!(buf.as_bytes().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn food_drawn_over_the_snake() {
    let body = [Cell::new(4, 4), Cell::new(3, 4), Cell::new(2, 4)];
    let game = GameState::from_layout(42, &body, Direction::Right, Cell::new(3, 4)).unwrap();
    let buf = render(&game);
    assert_eq!(buf.pixel(60, 80), Some(FOOD_COLOR));
}

#[test]
fn grid_lines_sit_on_cell_boundaries() {
    let mut buf = render(&GameState::new(42));
    draw_grid(&mut buf);

    for i in 0..20 {
        assert_eq!(buf.pixel(i * 20, 7), Some(GRID_LINE_COLOR));
        assert_eq!(buf.pixel(7, i * 20), Some(GRID_LINE_COLOR));
    }
    // Squares start on the boundary, so the grid overwrites their first row and column.
    assert_eq!(buf.pixel(200, 205), Some(GRID_LINE_COLOR));
    assert_eq!(buf.pixel(205, 205), Some(HEAD_COLOR));
    // The closing boundary at 400 is off the buffer.
    assert_eq!(buf.pixel(399, 7), Some(BACKGROUND_COLOR));
    assert_eq!(buf.pixel(400, 7), None);
}

#[test]
fn grid_is_idempotent() {
    let mut buf = render(&GameState::new(42));
    draw_grid(&mut buf);
    let once = buf.as_bytes().to_vec();
    draw_grid(&mut buf);
    assert_eq!(buf.as_bytes(), &once[..]);
}

#[test]
fn grid_on_cleared_buffer_only_touches_lines() {
    let mut buf = PixelBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
    draw_grid(&mut buf);

    // 20 vertical and 20 horizontal lines, crossings counted once.
    let lines = 20 * 400 + 20 * 400 - 20 * 20;
    assert_eq!(count(&buf, GRID_LINE_COLOR), lines);
    assert_eq!(buf.pixel(1, 1), Some(Rgba::new(0, 0, 0, 0)));
}
