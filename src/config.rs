//! Host configuration from environment variables.
//!
//! - `SNAKE_TICK_MS`: tick cadence in milliseconds (default 150, at least 10)
//! - `SNAKE_SHOW_GRID`: `1`/`true` to overlay grid lines every frame
//! - `SNAKE_LOG_PATH`: write logs to this file (terminal host only)

use crate::types::TICK_MS;

/// Lower bound for the tick cadence
pub const MIN_TICK_MS: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub tick_ms: u32,
    pub show_grid: bool,
    pub log_path: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            show_grid: false,
            log_path: None,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; absent or unparsable values
    /// fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("SNAKE_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .map(|ms| ms.max(MIN_TICK_MS))
            .unwrap_or(TICK_MS);

        let show_grid = lookup("SNAKE_SHOW_GRID")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            tick_ms,
            show_grid,
            log_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> HostConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HostConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), HostConfig::default());
        assert_eq!(HostConfig::default().tick_ms, 150);
    }

    #[test]
    fn parses_all_variables() {
        let config = config_from(&[
            ("SNAKE_TICK_MS", " 90 "),
            ("SNAKE_SHOW_GRID", "TRUE"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
        ]);
        assert_eq!(config.tick_ms, 90);
        assert!(config.show_grid);
        assert_eq!(config.log_path.as_deref(), Some("/tmp/snake.log"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = config_from(&[
            ("SNAKE_TICK_MS", "fast"),
            ("SNAKE_SHOW_GRID", "yes"),
            ("SNAKE_LOG_PATH", "   "),
        ]);
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn tick_is_clamped() {
        assert_eq!(config_from(&[("SNAKE_TICK_MS", "0")]).tick_ms, MIN_TICK_MS);
    }
}
