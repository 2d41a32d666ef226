//! A single dealt round.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::config::validate_pair_count;
use crate::core::{GameError, GameRng, Symbol, TileIndex};

/// The symbol assignment and progress of one round.
///
/// ## Invariants
///
/// - Every symbol in `0..pair_count` sits under exactly two tiles
/// - `pairs_found` only grows, one per match, and never exceeds `pair_count`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round counter within a controller.
    number: u64,
    /// Seed the tiles were shuffled with. Dealing again with this seed
    /// reproduces the board.
    seed: u64,
    /// Symbol under each tile, by index.
    tiles: Vec<Symbol>,
    /// Pairs matched so far.
    pairs_found: usize,
}

impl Round {
    /// Deal a fresh round of `pair_count` pairs using `rng`.
    pub fn deal(number: u64, pair_count: usize, rng: &mut GameRng) -> Result<Self, GameError> {
        validate_pair_count(pair_count)?;

        let mut tiles: Vec<Symbol> = (0..pair_count as u16)
            .flat_map(|id| [Symbol::new(id), Symbol::new(id)])
            .collect();
        rng.shuffle(&mut tiles);

        Ok(Self {
            number,
            seed: rng.seed(),
            tiles,
            pairs_found: 0,
        })
    }

    /// Build a round from an explicit layout.
    ///
    /// Used to replay a known board. Every symbol must appear exactly twice.
    pub fn from_layout(number: u64, tiles: Vec<Symbol>) -> Result<Self, GameError> {
        if tiles.len() % 2 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "a board needs an even number of tiles, got {}",
                tiles.len()
            )));
        }
        validate_pair_count(tiles.len() / 2)?;

        let round = Self {
            number,
            seed: 0,
            tiles,
            pairs_found: 0,
        };
        round.verify_pairs()?;
        Ok(round)
    }

    #[must_use]
    pub fn number(&self) -> u64 {
        self.number
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn tiles(&self) -> &[Symbol] {
        &self.tiles
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.pairs_found
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pairs_found == self.pair_count()
    }

    /// Symbol under `index`.
    pub fn value_at(&self, index: TileIndex) -> Result<Symbol, GameError> {
        self.tiles
            .get(index.raw())
            .copied()
            .ok_or(GameError::OutOfRange {
                index,
                tile_count: self.tiles.len(),
            })
    }

    /// Count one more found pair.
    pub fn record_match(&mut self) -> Result<usize, GameError> {
        if self.is_complete() {
            return Err(GameError::InvariantViolation(format!(
                "record_match called with all {} pairs already found",
                self.pair_count()
            )));
        }
        self.pairs_found += 1;
        Ok(self.pairs_found)
    }

    /// Check that every symbol appears exactly twice.
    pub fn verify_pairs(&self) -> Result<(), GameError> {
        let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
        for symbol in &self.tiles {
            *counts.entry(*symbol).or_insert(0) += 1;
        }

        if let Some((symbol, count)) = counts.iter().find(|(_, count)| **count != 2) {
            return Err(GameError::InvariantViolation(format!(
                "symbol {} appears {} times",
                symbol.raw(),
                count
            )));
        }
        Ok(())
    }

    /// Index of the other tile holding the same symbol as `index`.
    pub fn partner_of(&self, index: TileIndex) -> Result<TileIndex, GameError> {
        let symbol = self.value_at(index)?;
        self.tiles
            .iter()
            .enumerate()
            .find(|&(i, s)| i != index.raw() && *s == symbol)
            .map(|(i, _)| TileIndex::new(i))
            .ok_or_else(|| {
                GameError::InvariantViolation(format!("{} has no partner", index))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(symbols: &[u16]) -> Vec<Symbol> {
        symbols.iter().map(|&s| Symbol::new(s)).collect()
    }

    #[test]
    fn test_deal_pairs_every_symbol() {
        let mut rng = GameRng::new(42);
        let round = Round::deal(1, 6, &mut rng).unwrap();

        assert_eq!(round.tile_count(), 12);
        assert_eq!(round.pair_count(), 6);
        assert_eq!(round.pairs_found(), 0);
        assert!(round.verify_pairs().is_ok());
    }

    #[test]
    fn test_deal_rejects_zero_pairs() {
        let mut rng = GameRng::new(42);
        assert!(matches!(
            Round::deal(1, 0, &mut rng),
            Err(GameError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_deal_is_reproducible_from_seed() {
        let mut rng = GameRng::new(7);
        let round = Round::deal(1, 6, &mut rng).unwrap();

        let mut replay = GameRng::new(round.seed());
        let again = Round::deal(1, 6, &mut replay).unwrap();
        assert_eq!(round.tiles(), again.tiles());
    }

    #[test]
    fn test_from_layout() {
        let round = Round::from_layout(1, layout(&[0, 1, 0, 1])).unwrap();
        assert_eq!(round.value_at(TileIndex::new(2)).unwrap(), Symbol::new(0));

        assert!(Round::from_layout(1, layout(&[0, 1, 0])).is_err());
        assert!(Round::from_layout(1, layout(&[0, 0, 0, 1])).is_err());
        assert!(Round::from_layout(1, vec![]).is_err());
    }

    #[test]
    fn test_value_at_out_of_range() {
        let round = Round::from_layout(1, layout(&[0, 1, 1, 0])).unwrap();
        assert_eq!(
            round.value_at(TileIndex::new(4)),
            Err(GameError::OutOfRange {
                index: TileIndex::new(4),
                tile_count: 4
            })
        );
    }

    #[test]
    fn test_record_match_stops_at_pair_count() {
        let mut round = Round::from_layout(1, layout(&[0, 1, 1, 0])).unwrap();
        assert_eq!(round.record_match().unwrap(), 1);
        assert!(!round.is_complete());
        assert_eq!(round.record_match().unwrap(), 2);
        assert!(round.is_complete());

        assert!(matches!(
            round.record_match(),
            Err(GameError::InvariantViolation(_))
        ));
        assert_eq!(round.pairs_found(), 2);
    }

    #[test]
    fn test_partner_of() {
        let round = Round::from_layout(1, layout(&[0, 1, 1, 0])).unwrap();
        assert_eq!(round.partner_of(TileIndex::new(0)).unwrap(), TileIndex::new(3));
        assert_eq!(round.partner_of(TileIndex::new(2)).unwrap(), TileIndex::new(1));
    }
}
