//! Tile identification and visibility.
//!
//! Every tile on the board has a stable `TileIndex` in `0..tile_count` and
//! holds one `Symbol`. Each symbol is dealt to exactly two tiles.
//!
//! ## Usage
//!
//! ```
//! use memory_match::core::{Symbol, TileIndex, TileVisual};
//!
//! let tile = TileIndex::new(3);
//! assert_eq!(tile.raw(), 3);
//!
//! let shown = TileVisual::FaceUp(Symbol::new(0));
//! assert!(shown.is_face_up());
//! assert!(!TileVisual::Cleared.is_selectable());
//! ```

use serde::{Deserialize, Serialize};

/// Stable position of a tile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileIndex(pub usize);

impl TileIndex {
    /// Create a new tile index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }

    /// Iterate over every tile index of a board with `tile_count` tiles.
    pub fn all(tile_count: usize) -> impl Iterator<Item = TileIndex> {
        (0..tile_count).map(TileIndex)
    }
}

impl std::fmt::Display for TileIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Colour names used by the classic six-pair board.
const PALETTE: [&str; 6] = ["green", "blue", "red", "pink", "purple", "orange"];

/// The value hidden under a tile.
///
/// Symbols are opaque: two tiles match when their symbols are equal.
/// Symbols `0..pair_count` are dealt for a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u16);

impl Symbol {
    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Human-readable name: a colour for the first six symbols,
    /// `symbol-N` after that.
    #[must_use]
    pub fn name(self) -> String {
        match PALETTE.get(self.0 as usize) {
            Some(colour) => (*colour).to_string(),
            None => format!("symbol-{}", self.0),
        }
    }

    /// Single-character glyph for compact boards.
    ///
    /// `A..Z` then `a..z`, then `#`.
    #[must_use]
    pub fn glyph(self) -> char {
        match self.0 {
            n @ 0..=25 => (b'A' + n as u8) as char,
            n @ 26..=51 => (b'a' + (n - 26) as u8) as char,
            _ => '#',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// How a tile is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileVisual {
    /// Hidden, selectable.
    #[default]
    FaceDown,
    /// Revealed, showing its symbol.
    FaceUp(Symbol),
    /// Part of a found pair, removed from play.
    Cleared,
}

impl TileVisual {
    /// Whether the tile is currently revealed.
    #[must_use]
    pub fn is_face_up(self) -> bool {
        matches!(self, TileVisual::FaceUp(_))
    }

    /// Whether the tile has been cleared.
    #[must_use]
    pub fn is_cleared(self) -> bool {
        matches!(self, TileVisual::Cleared)
    }

    /// Whether a selection of this tile can ever be accepted.
    ///
    /// Only cleared tiles are permanently out of play.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        !self.is_cleared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_index() {
        let tile = TileIndex::new(7);
        assert_eq!(tile.raw(), 7);
        assert_eq!(format!("{}", tile), "Tile(7)");
    }

    #[test]
    fn test_tile_index_all() {
        let all: Vec<_> = TileIndex::all(4).collect();
        assert_eq!(all, vec![TileIndex(0), TileIndex(1), TileIndex(2), TileIndex(3)]);
    }

    #[test]
    fn test_symbol_names() {
        assert_eq!(Symbol::new(0).name(), "green");
        assert_eq!(Symbol::new(5).name(), "orange");
        assert_eq!(Symbol::new(6).name(), "symbol-6");
        assert_eq!(format!("{}", Symbol::new(2)), "red");
    }

    #[test]
    fn test_symbol_glyphs() {
        assert_eq!(Symbol::new(0).glyph(), 'A');
        assert_eq!(Symbol::new(25).glyph(), 'Z');
        assert_eq!(Symbol::new(26).glyph(), 'a');
        assert_eq!(Symbol::new(51).glyph(), 'z');
        assert_eq!(Symbol::new(52).glyph(), '#');
    }

    #[test]
    fn test_visual_predicates() {
        assert_eq!(TileVisual::default(), TileVisual::FaceDown);
        assert!(TileVisual::FaceDown.is_selectable());
        assert!(TileVisual::FaceUp(Symbol::new(1)).is_face_up());
        assert!(TileVisual::FaceUp(Symbol::new(1)).is_selectable());
        assert!(TileVisual::Cleared.is_cleared());
        assert!(!TileVisual::Cleared.is_selectable());
    }

    #[test]
    fn test_visual_serde() {
        let visual = TileVisual::FaceUp(Symbol::new(3));
        let json = serde_json::to_string(&visual).unwrap();
        let back: TileVisual = serde_json::from_str(&json).unwrap();
        assert_eq!(visual, back);
    }
}
