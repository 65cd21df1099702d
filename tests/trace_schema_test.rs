//! Shape and determinism of the trace records the `snake-trace` binary prints.

use pixel_snake::engine::Engine;
use pixel_snake::trace::{frame_hash, parse_script, replay, TickRecord};
use serde_json::Value;

fn run(script: &str, ticks: u32, grid: bool) -> Vec<TickRecord> {
    let mut engine = Engine::new();
    engine.initialize();
    replay(&mut engine, &parse_script(script).unwrap(), ticks, grid)
}

#[test]
fn records_serialize_with_stable_field_names() {
    let records = run("u", 1, false);
    let value = serde_json::to_value(&records[0]).unwrap();
    let obj = value.as_object().unwrap();

    for key in [
        "tick",
        "input",
        "accepted",
        "outcome",
        "updated",
        "direction",
        "head",
        "length",
        "score",
        "food",
        "game_over",
        "frame_hash",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert_eq!(obj.len(), 12);

    assert_eq!(value["tick"], 1);
    assert_eq!(value["input"], "up");
    assert_eq!(value["direction"], "up");
    assert_eq!(value["head"], serde_json::json!([10, 9]));
    assert_eq!(value["food"], serde_json::json!([13, 8]));
    assert_eq!(value["frame_hash"].as_str().unwrap().len(), 16);
}

#[test]
fn json_lines_parse_back() {
    let records = run("uurrr", 0, false);
    let text: String = records
        .iter()
        .map(|r| serde_json::to_string(r).unwrap() + "\n")
        .collect();

    let parsed: Vec<TickRecord> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(parsed, records);

    let last: Value = serde_json::from_str(text.lines().last().unwrap()).unwrap();
    assert_eq!(last["outcome"], "ate");
    assert_eq!(last["score"], 10);
    assert_eq!(last["length"], 4);
}

#[test]
fn no_input_ticks_serialize_as_null() {
    let records = run(".", 0, false);
    let value = serde_json::to_value(&records[0]).unwrap();
    assert_eq!(value["input"], Value::Null);
    assert_eq!(value["accepted"], false);
}

#[test]
fn replays_are_deterministic() {
    let a = run("uurrrdddlll", 30, false);
    let b = run("uurrrdddlll", 30, false);
    assert_eq!(a, b);
}

#[test]
fn grid_changes_the_frame_hash_only() {
    let plain = run("rr", 0, false);
    let grid = run("rr", 0, true);

    for (p, g) in plain.iter().zip(&grid) {
        assert_eq!(p.head, g.head);
        assert_ne!(p.frame_hash, g.frame_hash);
    }
}

#[test]
fn frame_hash_tracks_buffer_contents() {
    let mut engine = Engine::new();
    engine.initialize();
    let blank = frame_hash(engine.pixels().as_bytes());
    engine.update();
    assert_ne!(frame_hash(engine.pixels().as_bytes()), blank);
}
