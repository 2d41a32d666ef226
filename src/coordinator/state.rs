//! Turn states and the outcomes reported to callers.

use serde::{Deserialize, Serialize};

use crate::core::TileIndex;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    /// No tile selected.
    #[default]
    Idle,
    /// One tile face up, waiting for the second.
    OneSelected { first: TileIndex },
    /// Two tiles face up and the outcome decided; waiting for the reveal
    /// delay to expire. Selections are dropped.
    Resolving {
        first: TileIndex,
        second: TileIndex,
        matched: bool,
    },
}

impl TurnState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, TurnState::Idle)
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, TurnState::Resolving { .. })
    }

    /// Tiles currently selected this turn.
    #[must_use]
    pub fn pending(&self) -> Vec<TileIndex> {
        match *self {
            TurnState::Idle => vec![],
            TurnState::OneSelected { first } => vec![first],
            TurnState::Resolving { first, second, .. } => vec![first, second],
        }
    }
}

/// Why a selection was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The tile is already part of a found pair.
    Cleared,
    /// The tile is already the first selection of this turn.
    SameTile,
    /// A turn is being resolved.
    Resolving,
}

/// Result of a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First tile of a turn revealed.
    FirstRevealed,
    /// Second tile revealed; the turn resolves after the reveal delay.
    Resolving { matched: bool },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, SelectOutcome::Ignored(_))
    }
}

/// Something that happened while virtual time advanced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordinatorEvent {
    /// The round timer advanced.
    Tick { elapsed_secs: u64 },
    /// A pair was cleared.
    Matched {
        first: TileIndex,
        second: TileIndex,
        pairs_found: usize,
    },
    /// A non-matching pair was flipped back.
    Mismatched { first: TileIndex, second: TileIndex },
    /// The last pair was cleared.
    GameComplete { elapsed_secs: u64, attempts: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_tiles() {
        let a = TileIndex::new(0);
        let b = TileIndex::new(3);

        assert!(TurnState::Idle.pending().is_empty());
        assert!(TurnState::default().is_idle());
        assert_eq!(TurnState::OneSelected { first: a }.pending(), vec![a]);

        let resolving = TurnState::Resolving {
            first: a,
            second: b,
            matched: false,
        };
        assert!(resolving.is_resolving());
        assert_eq!(resolving.pending(), vec![a, b]);
    }

    #[test]
    fn test_outcome_is_ignored() {
        assert!(SelectOutcome::Ignored(IgnoreReason::SameTile).is_ignored());
        assert!(!SelectOutcome::FirstRevealed.is_ignored());
        assert!(!SelectOutcome::Resolving { matched: true }.is_ignored());
    }
}
