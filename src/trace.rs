//! Headless replay of a direction script, one JSON record per tick.
//!
//! A script is a string of per-tick inputs: `u`, `r`, `d`, `l` (any case)
//! request a heading before that tick's update, `.` leaves the heading alone.
//! Whitespace and commas are ignored, so `"rr.d, dl"` is six ticks.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::types::{Cell, Direction};

/// Input for a single tick.
pub type TickInput = Option<Direction>;

/// State after one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u32,
    /// Requested heading, if any
    pub input: Option<String>,
    /// Whether the request was accepted (false for reversals and no input)
    pub accepted: bool,
    pub outcome: String,
    pub updated: bool,
    pub direction: String,
    pub head: [i32; 2],
    pub length: usize,
    pub score: u32,
    pub food: [i32; 2],
    pub game_over: bool,
    /// FNV-1a 64 over the RGBA buffer, as 16 hex digits
    pub frame_hash: String,
}

pub fn parse_script(script: &str) -> Result<Vec<TickInput>> {
    let mut inputs = Vec::with_capacity(script.len());
    for (i, ch) in script.chars().enumerate() {
        if ch.is_whitespace() || ch == ',' {
            continue;
        }
        if ch == '.' {
            inputs.push(None);
            continue;
        }
        let mut utf8 = [0u8; 4];
        match Direction::from_str(ch.encode_utf8(&mut utf8)) {
            Some(dir) => inputs.push(Some(dir)),
            None => bail!("invalid move {ch:?} at offset {i} (expected u/r/d/l or '.')"),
        }
    }
    Ok(inputs)
}

/// FNV-1a 64-bit.
pub fn frame_hash(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn xy(cell: Cell) -> [i32; 2] {
    [cell.x, cell.y]
}

/// Drive `engine` through `inputs`, padding with no-input ticks up to
/// `min_ticks`. Stops after the tick that ends the game.
///
/// The engine is used as-is; call [`Engine::initialize`] first for a fresh game.
pub fn replay(engine: &mut Engine, inputs: &[TickInput], min_ticks: u32, grid: bool) -> Vec<TickRecord> {
    let total = inputs.len().max(min_ticks as usize);
    let mut records = Vec::with_capacity(total);

    for tick in 0..total {
        if engine.is_game_over() {
            break;
        }

        let input = inputs.get(tick).copied().flatten();
        let accepted = input.map(|dir| engine.set_direction(dir)).unwrap_or(false);

        let outcome = engine.tick();
        if grid {
            engine.draw_grid();
        }

        let game = engine.game();
        records.push(TickRecord {
            tick: tick as u32 + 1,
            input: input.map(|d| d.as_str().to_string()),
            accepted,
            outcome: outcome.as_str().to_string(),
            updated: outcome.is_applied(),
            direction: game.direction().as_str().to_string(),
            head: xy(game.head()),
            length: game.len(),
            score: game.score(),
            food: xy(game.food()),
            game_over: game.game_over(),
            frame_hash: format!("{:016x}", frame_hash(engine.pixels().as_bytes())),
        });
    }

    records
}
