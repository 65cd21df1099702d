//! Headless trace runner: replays a move script and prints one JSON record
//! per tick on stdout.
//!
//! Usage:
//!   cargo run --bin snake-trace -- --moves "rrdd..l" --ticks 40
//!   RUST_LOG=debug cargo run --bin snake-trace -- --grid --pretty

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use pixel_snake::engine::Engine;
use pixel_snake::logging;
use pixel_snake::trace::{parse_script, replay};
use pixel_snake::types::DEFAULT_SEED;

#[derive(Parser)]
#[command(name = "snake-trace")]
#[command(about = "Replay a Snake move script and print per-tick JSON snapshots")]
struct Args {
    /// Per-tick inputs: u/r/d/l request a heading, '.' keeps it
    #[arg(long, default_value = "")]
    moves: String,

    /// Run at least this many ticks (extra ticks have no input)
    #[arg(long, default_value_t = 0)]
    ticks: u32,

    /// Overlay grid lines after every update
    #[arg(long)]
    grid: bool,

    /// Pretty-print each record
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    logging::init_stderr()?;
    let args = Args::parse();

    let inputs = parse_script(&args.moves)?;
    let mut engine = Engine::with_seed(DEFAULT_SEED);
    engine.initialize();

    let records = replay(&mut engine, &inputs, args.ticks, args.grid);
    info!(
        ticks = records.len(),
        score = engine.score(),
        game_over = engine.is_game_over(),
        "replay finished"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for record in &records {
        if args.pretty {
            serde_json::to_writer_pretty(&mut out, record)?;
        } else {
            serde_json::to_writer(&mut out, record)?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
