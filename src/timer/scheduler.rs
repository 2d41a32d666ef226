//! Cancellable one-shot timers on a virtual clock.
//!
//! The scheduler never reads the wall clock. Callers ask for the next
//! deadline, let time pass however they like, and then drain due events
//! with `pop_due(now)`.
//!
//! ## Ordering
//!
//! Events fire in deadline order; events sharing a deadline fire in the
//! order they were scheduled. A cancelled event never fires.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a scheduled event, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Queue of pending timer events of type `E`.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    /// Min-heap of (deadline, id). Ids grow monotonically, which breaks ties
    /// in scheduling order.
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
    /// Live events by id. Cancelling removes the entry; the heap slot is
    /// skipped lazily.
    events: FxHashMap<u64, E>,
    next_id: u64,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            queue: BinaryHeap::new(),
            events: FxHashMap::default(),
            next_id: 0,
        }
    }
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` to fire at `at`.
    pub fn schedule(&mut self, at: Duration, event: E) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push(Reverse((at, id)));
        self.events.insert(id, event);
        TimerId(id)
    }

    /// Cancel a scheduled event.
    ///
    /// Returns `false` if the event already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.events.remove(&id.0).is_some()
    }

    /// Earliest deadline among live events.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.discard_cancelled();
        self.queue.peek().map(|Reverse((at, _))| *at)
    }

    /// Remove and return the earliest event due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<(Duration, E)> {
        self.discard_cancelled();
        match self.queue.peek() {
            Some(Reverse((at, _))) if *at <= now => {}
            _ => return None,
        }

        let Reverse((at, id)) = self.queue.pop()?;
        self.events.remove(&id).map(|event| (at, event))
    }

    /// Number of live events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn discard_cancelled(&mut self) {
        while let Some(Reverse((_, id))) = self.queue.peek() {
            if self.events.contains_key(id) {
                break;
            }
            self.queue.pop();
        }
    }
}
