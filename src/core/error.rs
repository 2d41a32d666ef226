//! Error types.
//!
//! Every error here is a programming-contract violation: a display surface
//! sending an index that doesn't exist, a coordinator driving the controller
//! out of order, or a configuration that cannot produce a board. User
//! mistakes (re-clicking a tile, clicking while a turn resolves) are not
//! errors; the coordinator reports them as ignored selections.

use thiserror::Error;

use super::TileIndex;

/// Errors raised by the controller and coordinator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// A tile index outside `0..tile_count`.
    #[error("{index} is out of range for a board of {tile_count} tiles")]
    OutOfRange {
        index: TileIndex,
        tile_count: usize,
    },

    /// The controller was driven inconsistently.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// The requested board cannot be built.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while loading a [`GameConfig`](super::GameConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] GameError),
}
