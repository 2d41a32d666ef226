//! Timing: the virtual-clock scheduler and the round timer.
//!
//! Nothing in this module sleeps. The coordinator schedules reveal delays
//! and timer ticks as events and a driver (the CLI, a test, a UI event
//! loop) advances virtual time.

mod clock;
mod scheduler;

pub use clock::{format_elapsed, RoundTimer};
pub use scheduler::{Scheduler, TimerId};
