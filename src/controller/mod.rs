//! Game controller: dealing rounds and counting found pairs.
//!
//! ## Usage
//!
//! ```
//! use memory_match::controller::GameController;
//! use memory_match::core::TileIndex;
//!
//! let mut controller = GameController::new(6, 42).unwrap();
//! assert_eq!(controller.tile_count(), 12);
//!
//! // Every symbol sits under exactly two tiles
//! let first = controller.value_at(TileIndex::new(0)).unwrap();
//! let copies = controller.tiles().iter().filter(|&&s| s == first).count();
//! assert_eq!(copies, 2);
//!
//! controller.record_match().unwrap();
//! assert_eq!(controller.pairs_found(), 1);
//!
//! controller.reset().unwrap();
//! assert_eq!(controller.pairs_found(), 0);
//! ```

mod game;
mod round;

pub use game::GameController;
pub use round::Round;
