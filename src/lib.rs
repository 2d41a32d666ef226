//! # memory-match
//!
//! A memory-matching (concentration) game engine with a UI-agnostic core.
//!
//! ## Design Principles
//!
//! 1. **Surface-Agnostic**: The engine never draws. It issues commands to a
//!    `DisplaySurface`; terminals, web pages and native windows all plug in
//!    the same way.
//!
//! 2. **Deterministic**: Boards are dealt from a seeded ChaCha RNG and time
//!    is virtual, so every game can be replayed and every timing contract
//!    tested without sleeping.
//!
//! 3. **Fail Fast**: Contract violations (bad tile index, inconsistent
//!    controller use) are errors. User slips (re-clicking a tile, clicking
//!    during a reveal) are ignored selections, never errors.
//!
//! ## Modules
//!
//! - `core`: Tile indices, symbols, visuals, RNG, configuration, errors
//! - `controller`: Dealing rounds and counting found pairs
//! - `timer`: Virtual-clock scheduler and the round timer
//! - `surface`: The `DisplaySurface` trait and bundled surfaces
//! - `coordinator`: The turn state machine that ties everything together

pub mod core;
pub mod controller;
pub mod timer;
pub mod surface;
pub mod coordinator;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, Symbol, TileIndex, TileVisual,
    DEFAULT_PAIRS, MAX_INTERVAL_MS, MAX_PAIRS,
};

pub use crate::controller::{GameController, Round};

pub use crate::timer::{format_elapsed, RoundTimer, Scheduler, TimerId};

pub use crate::surface::{DisplaySurface, RecordingSurface, SurfaceCommand, TerminalSurface};

pub use crate::coordinator::{
    CoordinatorEvent, IgnoreReason, SelectOutcome, TurnCoordinator, TurnState,
};
