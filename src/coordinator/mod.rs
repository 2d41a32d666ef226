//! Selection/turn coordination.
//!
//! ## Turn Flow
//!
//! ```text
//! Idle --select--> OneSelected --select(other)--> Resolving --reveal delay--> Idle
//! ```
//!
//! - **Idle**: the next accepted selection reveals a tile and, on the first
//!   selection of a round, starts the timer
//! - **OneSelected**: a second, different tile decides the turn
//! - **Resolving**: the two tiles stay visible until the reveal delay
//!   expires, then a match is cleared and a mismatch flipped back; all
//!   selections are dropped meanwhile
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//!
//! use memory_match::controller::GameController;
//! use memory_match::coordinator::{SelectOutcome, TurnCoordinator};
//! use memory_match::core::{GameConfig, Symbol, TileIndex, TileVisual};
//! use memory_match::surface::RecordingSurface;
//!
//! // Board A B A B
//! let tiles = [0, 1, 0, 1].iter().map(|&s| Symbol::new(s)).collect();
//! let controller = GameController::with_layout(tiles, 42).unwrap();
//! let config = GameConfig::new(2);
//! let mut game = TurnCoordinator::new(controller, RecordingSurface::new(4), &config);
//!
//! game.select(TileIndex::new(0)).unwrap();
//! let outcome = game.select(TileIndex::new(2)).unwrap();
//! assert_eq!(outcome, SelectOutcome::Resolving { matched: true });
//!
//! game.advance(config.reveal_delay()).unwrap();
//! assert_eq!(game.visual(TileIndex::new(0)), Some(TileVisual::Cleared));
//! assert_eq!(game.controller().pairs_found(), 1);
//! ```

mod state;
mod turn;

pub use state::{CoordinatorEvent, IgnoreReason, SelectOutcome, TurnState};
pub use turn::{completion_message, TurnCoordinator, MATCH_FOUND, NO_MATCH};
