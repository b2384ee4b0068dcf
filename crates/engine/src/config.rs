//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SNAKE_FIELD_WIDTH` | 40 |
//! | `SNAKE_FIELD_HEIGHT` | 20 |
//! | `SNAKE_TICK_MS` | 60 |
//! | `SNAKE_SEED` | derived from the clock |
//! | `SNAKE_LOG_PATH` | unset (logging off) |
//! | `SNAKE_LOG_LEVEL` | `info` |
//!
//! Unset or unparsable values fall back to the default; range checks happen in
//! [`GameConfig::validate`].

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Context, Result};
use log::LevelFilter;

use crate::types::{
    FieldSize, FIELD_HEIGHT, FIELD_WIDTH, MAX_FIELD_CELLS, MIN_FIELD_CELLS, MIN_TICK_MS, TICK_MS,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub field_width: u16,
    pub field_height: u16,
    pub tick_ms: u32,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            tick_ms: TICK_MS,
            seed: 1,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let field_width = parse_var(&lookup, "SNAKE_FIELD_WIDTH").unwrap_or(defaults.field_width);
        let field_height =
            parse_var(&lookup, "SNAKE_FIELD_HEIGHT").unwrap_or(defaults.field_height);
        let tick_ms = parse_var(&lookup, "SNAKE_TICK_MS").unwrap_or(defaults.tick_ms);
        let seed = parse_var(&lookup, "SNAKE_SEED").unwrap_or_else(clock_seed);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_level = parse_var(&lookup, "SNAKE_LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            field_width,
            field_height,
            tick_ms,
            seed,
            log_path,
            log_level,
        }
    }

    /// Check ranges and return the field geometry.
    pub fn validate(&self) -> Result<FieldSize> {
        ensure!(
            self.tick_ms >= MIN_TICK_MS,
            "SNAKE_TICK_MS must be at least {} (got {})",
            MIN_TICK_MS,
            self.tick_ms
        );
        let cells = (self.field_width as usize) * (self.field_height as usize);
        ensure!(
            cells <= MAX_FIELD_CELLS,
            "field must have at most {} cells (got {}x{} = {})",
            MAX_FIELD_CELLS,
            self.field_width,
            self.field_height,
            cells
        );
        FieldSize::new(self.field_width, self.field_height).with_context(|| {
            format!(
                "field must be at least {}x{} cells (got {}x{})",
                MIN_FIELD_CELLS, MIN_FIELD_CELLS, self.field_width, self.field_height
            )
        })
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup_from(&[("SNAKE_SEED", "9")]));
        assert_eq!(
            cfg,
            GameConfig {
                seed: 9,
                ..GameConfig::default()
            }
        );
        assert_eq!(cfg.tick_interval(), Duration::from_millis(60));
        let field = cfg.validate().unwrap();
        assert_eq!((field.width(), field.height()), (40, 20));
    }

    #[test]
    fn overrides_from_lookup() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("SNAKE_FIELD_WIDTH", "30"),
            ("SNAKE_FIELD_HEIGHT", " 12 "),
            ("SNAKE_TICK_MS", "100"),
            ("SNAKE_SEED", "77"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
            ("SNAKE_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(cfg.field_width, 30);
        assert_eq!(cfg.field_height, 12);
        assert_eq!(cfg.tick_ms, 100);
        assert_eq!(cfg.seed, 77);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/snake.log")));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("SNAKE_FIELD_WIDTH", "wide"),
            ("SNAKE_TICK_MS", "-5"),
            ("SNAKE_LOG_PATH", "   "),
            ("SNAKE_LOG_LEVEL", "chatty"),
        ]));
        assert_eq!(cfg.field_width, FIELD_WIDTH);
        assert_eq!(cfg.tick_ms, TICK_MS);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_level, LevelFilter::Info);
    }

    #[test]
    fn validate_rejects_small_field() {
        let cfg = GameConfig {
            field_width: 4,
            ..GameConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("at least 8x8"), "{}", err);
    }

    #[test]
    fn validate_rejects_huge_field() {
        let cfg = GameConfig::from_lookup(lookup_from(&[
            ("SNAKE_FIELD_WIDTH", "65535"),
            ("SNAKE_FIELD_HEIGHT", "65535"),
        ]));
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("at most"), "{}", err);

        let roomy = GameConfig {
            field_width: 300,
            field_height: 300,
            ..GameConfig::default()
        };
        assert_eq!(roomy.validate().unwrap().cells(), 90_000);
    }

    #[test]
    fn validate_rejects_fast_tick() {
        let cfg = GameConfig {
            tick_ms: 1,
            ..GameConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
