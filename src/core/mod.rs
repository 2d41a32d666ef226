//! Core game types: tiles, symbols, RNG, configuration, errors.
//!
//! These are shared by the controller, the coordinator and every display
//! surface.

pub mod config;
pub mod error;
pub mod rng;
pub mod tile;

pub use config::{GameConfig, DEFAULT_PAIRS, MAX_INTERVAL_MS, MAX_PAIRS};
pub use error::{ConfigError, GameError};
pub use rng::GameRng;
pub use tile::{Symbol, TileIndex, TileVisual};
