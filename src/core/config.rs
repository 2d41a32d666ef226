//! Game configuration.
//!
//! A `GameConfig` describes one board and its timing:
//! - `pair_count`: number of symbol pairs (tiles = 2 × pairs)
//! - `reveal_delay_ms`: how long a decided pair stays visible
//! - `tick_interval_ms`: timer resolution
//! - `seed`: optional fixed seed for reproducible deals
//! - `columns`: grid width for surfaces that lay tiles out
//!
//! Configs can be built in code or loaded from TOML. Missing keys take
//! their defaults.
//!
//! ```
//! use memory_match::core::GameConfig;
//!
//! let config = GameConfig::from_toml_str("pair_count = 8\nseed = 7").unwrap();
//! assert_eq!(config.pair_count, 8);
//! assert_eq!(config.tile_count(), 16);
//! assert_eq!(config.reveal_delay_ms, 500);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, GameError};

/// Largest supported number of pairs per board.
pub const MAX_PAIRS: usize = 64;

/// Pairs on the classic board.
pub const DEFAULT_PAIRS: usize = 6;

/// Longest accepted reveal delay or tick interval (one hour).
pub const MAX_INTERVAL_MS: u64 = 60 * 60 * 1000;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of symbol pairs (1..=MAX_PAIRS).
    pub pair_count: usize,

    /// Delay between deciding a turn and clearing / flipping back its tiles.
    pub reveal_delay_ms: u64,

    /// Interval between timer ticks.
    pub tick_interval_ms: u64,

    /// Fixed seed for dealing. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Grid width used by surfaces that lay tiles out in rows.
    pub columns: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIRS,
            reveal_delay_ms: 500,
            tick_interval_ms: 1000,
            seed: None,
            columns: 4,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given number of pairs.
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the reveal delay. Sub-millisecond precision is dropped; an
    /// out-of-range delay saturates and fails [`validate`](Self::validate).
    #[must_use]
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay_ms = whole_millis(delay);
        self
    }

    /// Set the timer tick interval. Saturates like
    /// [`with_reveal_delay`](Self::with_reveal_delay).
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = whole_millis(interval);
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.pair_count * 2
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that this configuration can produce a playable board.
    pub fn validate(&self) -> Result<(), GameError> {
        validate_pair_count(self.pair_count)?;
        validate_interval("reveal_delay_ms", self.reveal_delay_ms)?;
        validate_interval("tick_interval_ms", self.tick_interval_ms)?;
        if self.columns == 0 {
            return Err(GameError::InvalidConfig("columns must be positive".into()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn validate_interval(name: &str, millis: u64) -> Result<(), GameError> {
    if millis == 0 {
        return Err(GameError::InvalidConfig(format!("{} must be positive", name)));
    }
    if millis > MAX_INTERVAL_MS {
        return Err(GameError::InvalidConfig(format!(
            "{} {} exceeds the maximum of {}",
            name, millis, MAX_INTERVAL_MS
        )));
    }
    Ok(())
}

/// Check a pair count against the supported board sizes.
pub(crate) fn validate_pair_count(pair_count: usize) -> Result<(), GameError> {
    if pair_count == 0 {
        return Err(GameError::InvalidConfig("pair_count must be at least 1".into()));
    }
    if pair_count > MAX_PAIRS {
        return Err(GameError::InvalidConfig(format!(
            "pair_count {} exceeds the maximum of {}",
            pair_count, MAX_PAIRS
        )));
    }
    Ok(())
}
