//! One-shot timers on a logical clock.
//!
//! The scheduler never sleeps or spawns. Time moves only when the owner
//! calls [`Scheduler::advance`], and due timers are handed back one at a
//! time through [`Scheduler::pop_due`]. Each timer remembers the state that
//! armed it so leaving that state can cancel it.

use std::time::Duration;

use super::state::StateValue;
use super::table::Target;

/// Timer identifier, unique per scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// A pending delayed transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    /// State that armed the timer.
    pub owner: StateValue,
    /// Where to go when it fires.
    pub target: Target,
    /// Delay it was armed with.
    pub delay: Duration,
    /// Logical time at which it fires.
    pub due: Duration,
}

/// Logical clock with pending timers ordered by due time.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arm a timer that fires `delay` from now.
    pub fn schedule(&mut self, owner: StateValue, target: Target, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let timer = Timer {
            id,
            owner,
            target,
            delay,
            due: self.now.saturating_add(delay),
        };
        // Ties fire in scheduling order
        let index = self.pending.partition_point(|t| t.due <= timer.due);
        self.pending.insert(index, timer);
        id
    }

    /// Cancel every timer armed by `owner`, returning how many were dropped.
    pub fn cancel_owned_by(&mut self, owner: StateValue) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| t.owner != owner);
        before - self.pending.len()
    }

    /// Move the clock forward.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now = self.now.saturating_add(elapsed);
    }

    /// Remove and return the earliest timer that is due, if any.
    pub fn pop_due(&mut self) -> Option<Timer> {
        match self.pending.first() {
            Some(timer) if timer.due <= self.now => Some(self.pending.remove(0)),
            _ => None,
        }
    }

    /// Timers not yet fired, earliest first.
    #[must_use]
    pub fn pending(&self) -> &[Timer] {
        &self.pending
    }

    /// When the next timer fires.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|t| t.due)
    }
}
