//! Pixel Snake (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `pixel_snake::{types, core, raster, engine, input, term}`
//! and carries the pieces shared by the two native hosts (configuration,
//! logging setup, trace replay).

pub mod config;
pub mod logging;
pub mod trace;

pub use pixel_snake_core as core;
pub use pixel_snake_engine as engine;
pub use pixel_snake_input as input;
pub use pixel_snake_raster as raster;
pub use pixel_snake_term as term;
pub use pixel_snake_types as types;
