//! Software rasterizer module.
//!
//! Draws the game into a raw RGBA8 byte buffer that a host can display as a
//! standard image (row-major, top to bottom, channel order R, G, B, A).
//!
//! - [`pixel_buffer`]: the byte buffer plus clipped rectangle fills
//! - [`render`]: full-frame redraw of a game and the grid overlay

pub mod pixel_buffer;
pub mod render;

pub use pixel_snake_core as core;
pub use pixel_snake_types as types;

pub use pixel_buffer::PixelBuffer;
pub use render::{cell_origin, draw_grid, render_frame, SQUARE_PX};
