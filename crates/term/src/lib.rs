//! Terminal presentation module.
//!
//! A small rendering layer that lets the terminal host display the engine's
//! RGBA pixel buffer. The buffer is sampled into a framebuffer of styled
//! character cells, which is then flushed to the terminal with diffing.
//!
//! - [`fb`]: character-cell framebuffer
//! - [`pixel_view`]: pixel buffer + HUD to framebuffer
//! - [`renderer`]: framebuffer to terminal (crossterm)

pub mod fb;
pub mod pixel_view;
pub mod renderer;

pub use pixel_snake_raster as raster;
pub use pixel_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use pixel_view::{HudState, PixelView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
