//! The game controller: owns the current round.

use tracing::{debug, info};

use crate::core::{GameError, GameRng, Symbol, TileIndex};

use super::Round;

/// Owns the symbol assignment of the current round and its pair counter.
///
/// The controller never touches a display: the coordinator queries it and
/// reports to the user. Each round is dealt from a fresh fork of the
/// controller's RNG, so a seeded controller produces the same sequence of
/// boards every time.
#[derive(Clone, Debug)]
pub struct GameController {
    rng: GameRng,
    pair_count: usize,
    round: Round,
}

impl GameController {
    /// Create a controller and deal its first round.
    pub fn new(pair_count: usize, seed: u64) -> Result<Self, GameError> {
        let mut rng = GameRng::new(seed);
        let round = Round::deal(1, pair_count, &mut rng.fork())?;
        info!(pair_count, seed, "dealt round 1");
        Ok(Self {
            rng,
            pair_count,
            round,
        })
    }

    /// Create a controller around a fixed board.
    ///
    /// The first round uses `tiles` as given; later rounds are dealt from
    /// `seed` with the same pair count.
    pub fn with_layout(tiles: Vec<Symbol>, seed: u64) -> Result<Self, GameError> {
        let round = Round::from_layout(1, tiles)?;
        Ok(Self {
            rng: GameRng::new(seed),
            pair_count: round.pair_count(),
            round,
        })
    }

    /// Deal a new round of `pair_count` pairs and reset the pair counter.
    ///
    /// On error the current round is left untouched.
    pub fn new_round(&mut self, pair_count: usize) -> Result<(), GameError> {
        let number = self.round.number() + 1;
        let round = Round::deal(number, pair_count, &mut self.rng.fork())?;
        info!(round = number, pair_count, seed = round.seed(), "dealt round");
        self.pair_count = pair_count;
        self.round = round;
        Ok(())
    }

    /// Deal a new round with the previously configured pair count.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.new_round(self.pair_count)
    }

    /// Symbol under `index`.
    pub fn value_at(&self, index: TileIndex) -> Result<Symbol, GameError> {
        self.round.value_at(index)
    }

    /// Record a found pair. Fails if every pair is already found.
    pub fn record_match(&mut self) -> Result<usize, GameError> {
        let found = self.round.record_match()?;
        debug!(round = self.round.number(), found, of = self.pair_count, "pair recorded");
        Ok(found)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.is_complete()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.round.pairs_found()
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.round.tile_count()
    }

    #[must_use]
    pub fn round_number(&self) -> u64 {
        self.round.number()
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Symbols of the current round, by tile index.
    #[must_use]
    pub fn tiles(&self) -> &[Symbol] {
        self.round.tiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller() {
        let controller = GameController::new(6, 42).unwrap();
        assert_eq!(controller.pair_count(), 6);
        assert_eq!(controller.tile_count(), 12);
        assert_eq!(controller.pairs_found(), 0);
        assert_eq!(controller.round_number(), 1);
        assert!(!controller.is_complete());
    }

    #[test]
    fn test_new_round_resets_progress() {
        let mut controller = GameController::new(2, 42).unwrap();
        controller.record_match().unwrap();
        assert_eq!(controller.pairs_found(), 1);

        controller.new_round(3).unwrap();
        assert_eq!(controller.pairs_found(), 0);
        assert_eq!(controller.pair_count(), 3);
        assert_eq!(controller.tile_count(), 6);
        assert_eq!(controller.round_number(), 2);
    }

    #[test]
    fn test_failed_new_round_keeps_current() {
        let mut controller = GameController::new(2, 42).unwrap();
        let before = controller.tiles().to_vec();

        assert!(controller.new_round(0).is_err());
        assert_eq!(controller.tiles(), before.as_slice());
        assert_eq!(controller.pair_count(), 2);
        assert_eq!(controller.round_number(), 1);
    }

    #[test]
    fn test_reset_keeps_pair_count() {
        let mut controller = GameController::new(4, 42).unwrap();
        controller.record_match().unwrap();
        controller.reset().unwrap();

        assert_eq!(controller.pair_count(), 4);
        assert_eq!(controller.pairs_found(), 0);
        assert!(controller.round().verify_pairs().is_ok());
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = GameController::new(6, 1234).unwrap();
        let mut b = GameController::new(6, 1234).unwrap();
        assert_eq!(a.tiles(), b.tiles());

        a.reset().unwrap();
        b.reset().unwrap();
        assert_eq!(a.tiles(), b.tiles());
    }

    #[test]
    fn test_complete_after_all_pairs() {
        let mut controller = GameController::new(3, 9).unwrap();
        for expected in 1..=3 {
            assert!(!controller.is_complete());
            assert_eq!(controller.record_match().unwrap(), expected);
        }
        assert!(controller.is_complete());
        assert!(matches!(
            controller.record_match(),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_with_layout() {
        let tiles = [0, 1, 0, 1].iter().map(|&s| Symbol::new(s)).collect();
        let mut controller = GameController::with_layout(tiles, 5).unwrap();
        assert_eq!(controller.value_at(TileIndex::new(0)).unwrap(), Symbol::new(0));
        assert_eq!(controller.value_at(TileIndex::new(3)).unwrap(), Symbol::new(1));
        assert!(controller.value_at(TileIndex::new(4)).is_err());

        controller.reset().unwrap();
        assert_eq!(controller.pair_count(), 2);
        assert_eq!(controller.round_number(), 2);
    }
}
