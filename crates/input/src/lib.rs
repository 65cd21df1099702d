//! Terminal input module (host-facing).
//!
//! This module is independent of any UI framework beyond `crossterm` key
//! events. It maps keys to [`HostCommand`]s; turning is forwarded to the
//! engine as a direction code, the rest is handled by the host loop.

pub mod map;

pub use pixel_snake_types as types;

pub use map::{handle_key_event, should_quit, HostCommand};
