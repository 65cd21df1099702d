//! Engine module - the host-facing game session.
//!
//! [`Engine`] bundles a [`GameState`](crate::core::GameState) with the
//! [`PixelBuffer`](crate::raster::PixelBuffer) it is drawn into, and implements
//! the operation table a host drives:
//!
//! | Operation | Method | wasm export |
//! |-----------|--------|-------------|
//! | initialize | [`Engine::initialize`] | `initialize` |
//! | drawGrid | [`Engine::draw_grid`] | `drawGrid` |
//! | setDirection | [`Engine::set_direction_code`] | `setDirection` |
//! | update | [`Engine::update`] | `update` |
//! | getBufferPointer | [`Engine::buffer_ptr`] | `getBufferPointer` |
//! | getBufferSize | [`Engine::buffer_size`] | `getBufferSize` |
//! | getScore | [`Engine::score`] | `getScore` |
//! | isGameOver | [`Engine::is_game_over`] | `isGameOver` |
//!
//! The [`ffi`] module exposes one process-wide session through a C ABI for
//! the `wasm32` build. Native callers should own an [`Engine`] directly.
//!
//! # Example
//!
//! ```
//! use pixel_snake_engine::Engine;
//! use pixel_snake_types::{BUFFER_LEN, HEAD_COLOR};
//!
//! let mut engine = Engine::new();
//! engine.initialize();
//! assert_eq!(engine.buffer_size(), BUFFER_LEN);
//!
//! assert!(engine.update());
//! // Head moved from (10, 10) to (11, 10): pixel (220, 200) is inside it.
//! assert_eq!(engine.pixels().pixel(220, 200), Some(HEAD_COLOR));
//! ```

pub mod engine;
pub mod ffi;

pub use pixel_snake_core as core;
pub use pixel_snake_raster as raster;
pub use pixel_snake_types as types;

pub use engine::Engine;
