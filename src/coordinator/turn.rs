//! The selection/turn coordinator.

use std::time::Duration;

use tracing::{debug, info, trace};

use crate::controller::GameController;
use crate::core::{GameConfig, GameError, TileIndex, TileVisual};
use crate::surface::DisplaySurface;
use crate::timer::{RoundTimer, Scheduler, TimerId};

use super::{CoordinatorEvent, IgnoreReason, SelectOutcome, TurnState};

/// Announced when the two selected tiles match.
pub const MATCH_FOUND: &str = "Match found!";

/// Announced when the two selected tiles differ.
pub const NO_MATCH: &str = "Not a match. Try again.";

/// Announced when the last pair is cleared.
#[must_use]
pub fn completion_message(pair_count: usize, time: &str) -> String {
    format!("Congratulations! You found all {} pairs in {}!", pair_count, time)
}

/// Work waiting on the virtual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Scheduled {
    Tick,
    Resolve,
}

/// Drives one game: accepts selections, decides turns, runs the timer and
/// tells a [`DisplaySurface`] what to show.
///
/// ## Timing
///
/// The coordinator keeps a virtual clock. Nothing happens between calls:
/// the reveal delay and the timer ticks are scheduled events that fire when
/// the owner calls [`advance_to`](Self::advance_to) (or
/// [`advance`](Self::advance)) with a time at or past their deadline. A
/// driver wakes at [`next_deadline`](Self::next_deadline).
///
/// ## Guards
///
/// - Selecting a cleared tile is ignored
/// - Re-selecting the first tile of a turn is ignored
/// - Every selection while a turn resolves is dropped, so only one
///   resolution is ever in flight
/// - [`reset`](Self::reset) cancels the pending resolution and the timer
///   before dealing again, so no stale event reaches the new round
pub struct TurnCoordinator<S: DisplaySurface> {
    controller: GameController,
    surface: S,
    reveal_delay: Duration,
    tick_interval: Duration,
    scheduler: Scheduler<Scheduled>,
    timer: RoundTimer,
    state: TurnState,
    pending_resolution: Option<TimerId>,
    visuals: Vec<TileVisual>,
    now: Duration,
    attempts: u32,
}

impl<S: DisplaySurface> TurnCoordinator<S> {
    /// Create a coordinator around an existing controller.
    ///
    /// Paints every tile face down and clears the timer text.
    pub fn new(controller: GameController, surface: S, config: &GameConfig) -> Self {
        let mut coordinator = Self {
            visuals: vec![TileVisual::FaceDown; controller.tile_count()],
            controller,
            surface,
            reveal_delay: config.reveal_delay(),
            tick_interval: config.tick_interval(),
            scheduler: Scheduler::new(),
            timer: RoundTimer::new(),
            state: TurnState::Idle,
            pending_resolution: None,
            now: Duration::ZERO,
            attempts: 0,
        };
        coordinator.paint_board();
        coordinator
    }

    /// Validate `config`, deal a round and create a coordinator for it.
    pub fn from_config(config: &GameConfig, surface: S) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let controller = GameController::new(config.pair_count, seed)?;
        Ok(Self::new(controller, surface, config))
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// How a tile is currently shown.
    #[must_use]
    pub fn visual(&self, index: TileIndex) -> Option<TileVisual> {
        self.visuals.get(index.raw()).copied()
    }

    #[must_use]
    pub fn visuals(&self) -> &[TileVisual] {
        &self.visuals
    }

    /// Completed two-tile turns this round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn is_game_complete(&self) -> bool {
        self.controller.is_complete()
    }

    /// When the next scheduled event is due, if any.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    // === Input ===

    /// Handle a tile selection from the display surface.
    ///
    /// Fails only for an index outside the board.
    pub fn select(&mut self, index: TileIndex) -> Result<SelectOutcome, GameError> {
        let symbol = self.controller.value_at(index)?;

        if self.state.is_resolving() {
            debug!(%index, "selection dropped while resolving");
            return Ok(SelectOutcome::Ignored(IgnoreReason::Resolving));
        }
        if self.visuals[index.raw()].is_cleared() {
            debug!(%index, "selection of cleared tile ignored");
            return Ok(SelectOutcome::Ignored(IgnoreReason::Cleared));
        }

        match self.state {
            TurnState::Idle => {
                self.show(index, TileVisual::FaceUp(symbol));
                self.state = TurnState::OneSelected { first: index };
                if !self.timer.has_started() {
                    self.start_timer();
                }
                debug!(%index, "first tile revealed");
                Ok(SelectOutcome::FirstRevealed)
            }
            TurnState::OneSelected { first } if first == index => {
                debug!(%index, "re-selection of first tile ignored");
                Ok(SelectOutcome::Ignored(IgnoreReason::SameTile))
            }
            TurnState::OneSelected { first } => {
                self.show(index, TileVisual::FaceUp(symbol));
                let matched = self.controller.value_at(first)? == symbol;
                self.attempts += 1;
                self.state = TurnState::Resolving {
                    first,
                    second: index,
                    matched,
                };
                self.pending_resolution = Some(
                    self.scheduler
                        .schedule(self.now + self.reveal_delay, Scheduled::Resolve),
                );
                self.surface.announce(if matched { MATCH_FOUND } else { NO_MATCH });
                debug!(%first, second = %index, matched, "turn decided");
                Ok(SelectOutcome::Resolving { matched })
            }
            TurnState::Resolving { .. } => Ok(SelectOutcome::Ignored(IgnoreReason::Resolving)),
        }
    }

    /// Abandon the current game and deal a new one with the same pair count.
    pub fn reset(&mut self) -> Result<(), GameError> {
        self.cancel_pending();
        self.controller.reset()?;
        self.begin_round();
        Ok(())
    }

    /// Abandon the current game and deal a new one with `pair_count` pairs.
    ///
    /// On error nothing changes.
    pub fn new_game(&mut self, pair_count: usize) -> Result<(), GameError> {
        self.controller.new_round(pair_count)?;
        self.cancel_pending();
        self.begin_round();
        Ok(())
    }

    // === Time ===

    /// Advance virtual time by `delta`.
    pub fn advance(&mut self, delta: Duration) -> Result<Vec<CoordinatorEvent>, GameError> {
        self.advance_to(self.now + delta)
    }

    /// Advance virtual time to `now`, firing every event due by then in
    /// deadline order. Time never runs backwards: an earlier `now` fires
    /// nothing.
    pub fn advance_to(&mut self, now: Duration) -> Result<Vec<CoordinatorEvent>, GameError> {
        let mut events = Vec::new();
        while let Some((at, scheduled)) = self.scheduler.pop_due(now) {
            self.now = self.now.max(at);
            match scheduled {
                Scheduled::Tick => events.push(self.on_tick()),
                Scheduled::Resolve => self.on_resolve(&mut events)?,
            }
        }
        self.now = self.now.max(now);
        Ok(events)
    }

    // === Internals ===

    fn show(&mut self, index: TileIndex, visual: TileVisual) {
        self.visuals[index.raw()] = visual;
        self.surface.set_tile_visual(index, visual);
    }

    fn paint_board(&mut self) {
        for index in TileIndex::all(self.visuals.len()) {
            self.surface.set_tile_visual(index, TileVisual::FaceDown);
        }
        self.surface.set_timer_text("");
    }

    fn cancel_pending(&mut self) {
        if let Some(id) = self.pending_resolution.take() {
            self.scheduler.cancel(id);
        }
        if let Some(id) = self.timer.reset() {
            self.scheduler.cancel(id);
        }
    }

    fn begin_round(&mut self) {
        self.state = TurnState::Idle;
        self.attempts = 0;
        self.visuals = vec![TileVisual::FaceDown; self.controller.tile_count()];
        self.paint_board();
        info!(
            round = self.controller.round_number(),
            pairs = self.controller.pair_count(),
            "new game"
        );
    }

    fn start_timer(&mut self) {
        let first_tick = self
            .scheduler
            .schedule(self.now + self.tick_interval, Scheduled::Tick);
        self.timer.start(self.now, first_tick);
        self.surface.set_timer_text(&self.timer.text());
    }

    fn on_tick(&mut self) -> CoordinatorEvent {
        let next = self
            .scheduler
            .schedule(self.now + self.tick_interval, Scheduled::Tick);
        let elapsed_secs = self.timer.tick(self.now, next);
        self.surface.set_timer_text(&self.timer.text());
        trace!(elapsed_secs, "tick");
        CoordinatorEvent::Tick { elapsed_secs }
    }

    fn on_resolve(&mut self, events: &mut Vec<CoordinatorEvent>) -> Result<(), GameError> {
        self.pending_resolution = None;
        let TurnState::Resolving {
            first,
            second,
            matched,
        } = self.state
        else {
            return Err(GameError::InvariantViolation(format!(
                "resolution fired in state {:?}",
                self.state
            )));
        };

        self.state = TurnState::Idle;

        if !matched {
            self.show(first, TileVisual::FaceDown);
            self.show(second, TileVisual::FaceDown);
            debug!(%first, %second, "mismatch flipped back");
            events.push(CoordinatorEvent::Mismatched { first, second });
            return Ok(());
        }

        self.show(first, TileVisual::Cleared);
        self.show(second, TileVisual::Cleared);
        let pairs_found = self.controller.record_match()?;
        debug!(%first, %second, pairs_found, "pair cleared");
        events.push(CoordinatorEvent::Matched {
            first,
            second,
            pairs_found,
        });

        if self.controller.is_complete() {
            if let Some(id) = self.timer.stop() {
                self.scheduler.cancel(id);
            }
            let time = self.timer.text();
            self.surface
                .announce(&completion_message(self.controller.pair_count(), &time));
            self.surface.prompt_new_game();
            info!(
                elapsed = %time,
                attempts = self.attempts,
                round = self.controller.round_number(),
                "game complete"
            );
            events.push(CoordinatorEvent::GameComplete {
                elapsed_secs: self.timer.elapsed_secs(),
                attempts: self.attempts,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;
    use crate::surface::RecordingSurface;

    const DELAY: Duration = Duration::from_millis(500);

    fn coordinator(symbols: &[u16]) -> TurnCoordinator<RecordingSurface> {
        let tiles = symbols.iter().map(|&s| Symbol::new(s)).collect();
        let controller = GameController::with_layout(tiles, 1).unwrap();
        let surface = RecordingSurface::new(symbols.len());
        TurnCoordinator::new(controller, surface, &GameConfig::default())
    }

    fn t(i: usize) -> TileIndex {
        TileIndex::new(i)
    }

    #[test]
    fn test_starts_idle_and_face_down() {
        let game = coordinator(&[0, 1, 0, 1]);
        assert!(game.state().is_idle());
        assert!(game.visuals().iter().all(|v| *v == TileVisual::FaceDown));
        assert!(!game.timer_running());
        assert_eq!(game.surface().commands().len(), 5);
    }

    #[test]
    fn test_first_selection_reveals_and_starts_timer() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        assert_eq!(game.select(t(1)).unwrap(), SelectOutcome::FirstRevealed);

        assert_eq!(game.state(), TurnState::OneSelected { first: t(1) });
        assert_eq!(game.visual(t(1)), Some(TileVisual::FaceUp(Symbol::new(1))));
        assert!(game.timer_running());
        assert_eq!(game.surface().timer_text(), "0:00");
    }

    #[test]
    fn test_same_tile_is_ignored() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        game.select(t(0)).unwrap();
        assert_eq!(
            game.select(t(0)).unwrap(),
            SelectOutcome::Ignored(IgnoreReason::SameTile)
        );
        assert_eq!(game.state(), TurnState::OneSelected { first: t(0) });
    }

    #[test]
    fn test_match_resolves_after_delay() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        game.select(t(0)).unwrap();
        assert_eq!(
            game.select(t(2)).unwrap(),
            SelectOutcome::Resolving { matched: true }
        );
        assert_eq!(game.surface().last_announcement(), Some(MATCH_FOUND));

        // Still visible just before the deadline
        assert!(game.advance(DELAY - Duration::from_millis(1)).unwrap().is_empty());
        assert!(game.state().is_resolving());
        assert_eq!(game.controller().pairs_found(), 0);

        let events = game.advance(Duration::from_millis(1)).unwrap();
        assert_eq!(
            events,
            vec![CoordinatorEvent::Matched {
                first: t(0),
                second: t(2),
                pairs_found: 1
            }]
        );
        assert!(game.state().is_idle());
        assert_eq!(game.visual(t(0)), Some(TileVisual::Cleared));
        assert_eq!(game.visual(t(2)), Some(TileVisual::Cleared));
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut game = coordinator(&[0, 1, 1, 0]);
        game.select(t(0)).unwrap();
        assert_eq!(
            game.select(t(1)).unwrap(),
            SelectOutcome::Resolving { matched: false }
        );
        assert_eq!(game.surface().last_announcement(), Some(NO_MATCH));

        let events = game.advance(DELAY).unwrap();
        assert_eq!(
            events,
            vec![CoordinatorEvent::Mismatched {
                first: t(0),
                second: t(1)
            }]
        );
        assert_eq!(game.visual(t(0)), Some(TileVisual::FaceDown));
        assert_eq!(game.visual(t(1)), Some(TileVisual::FaceDown));
        assert_eq!(game.controller().pairs_found(), 0);
        assert_eq!(game.attempts(), 1);
    }

    #[test]
    fn test_selection_dropped_while_resolving() {
        let mut game = coordinator(&[0, 1, 1, 0]);
        game.select(t(0)).unwrap();
        game.select(t(1)).unwrap();

        assert_eq!(
            game.select(t(2)).unwrap(),
            SelectOutcome::Ignored(IgnoreReason::Resolving)
        );
        assert_eq!(game.visual(t(2)), Some(TileVisual::FaceDown));
        assert!(game.state().is_resolving());
    }

    #[test]
    fn test_cleared_tile_is_ignored() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        game.select(t(0)).unwrap();
        game.select(t(2)).unwrap();
        game.advance(DELAY).unwrap();

        assert_eq!(
            game.select(t(0)).unwrap(),
            SelectOutcome::Ignored(IgnoreReason::Cleared)
        );
        assert!(game.state().is_idle());
    }

    #[test]
    fn test_out_of_range_fails_fast() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        assert_eq!(
            game.select(t(4)),
            Err(GameError::OutOfRange {
                index: t(4),
                tile_count: 4
            })
        );
        assert!(game.state().is_idle());
    }

    #[test]
    fn test_time_never_runs_backwards() {
        let mut game = coordinator(&[0, 1, 0, 1]);
        game.advance_to(Duration::from_secs(5)).unwrap();
        game.advance_to(Duration::from_secs(2)).unwrap();
        assert_eq!(game.now(), Duration::from_secs(5));
    }

    #[test]
    fn test_completion_message() {
        assert_eq!(
            completion_message(6, "1:05"),
            "Congratulations! You found all 6 pairs in 1:05!"
        );
    }
}
