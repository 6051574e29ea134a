//! Scheduled callbacks on a virtual millisecond clock.
//!
//! The session never sleeps. It schedules a `TimerKind` with a delay and
//! the host advances the clock (`GameSession::advance`) with however much
//! time has passed. Due timers fire in deadline order, ties in scheduling
//! order.
//!
//! Every timer carries the generation of the board that scheduled it.
//! Resetting the board cancels all pending timers and bumps the
//! generation, so a timer can never act on a torn-down board.

use serde::{Deserialize, Serialize};

/// What a timer does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// End of the all-cards-visible window after start.
    RevealEnd,
    /// End of the window a mismatched pair stays face-up.
    MismatchEnd,
}

/// Handle of a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// A scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub id: TimerId,
    pub kind: TimerKind,
    /// Board generation at scheduling time.
    pub generation: u64,
    /// Clock value the timer is due at.
    pub due: u64,
}

/// Pending timers plus the virtual clock.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_id: u64,
    pending: Vec<Timer>,
}

impl Scheduler {
    /// Create an empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Is a timer of this kind waiting?
    #[must_use]
    pub fn has_pending(&self, kind: TimerKind) -> bool {
        self.pending.iter().any(|t| t.kind == kind)
    }

    /// Milliseconds until the next timer is due, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due.saturating_sub(self.now)).min()
    }

    /// Schedule `kind` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, generation: u64, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Timer {
            id,
            kind,
            generation,
            due: self.now.saturating_add(delay_ms),
        });
        id
    }

    /// Cancel one timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Cancel every pending timer, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so handlers that schedule
    /// follow-up timers measure from the right instant.
    pub fn pop_due(&mut self, until: u64) -> Option<Timer> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by_key(|(_, t)| (t.due, t.id))?;

        let timer = self.pending.remove(pos);
        self.now = self.now.max(timer.due);
        Some(timer)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: u64) {
        self.now = self.now.max(until);
    }
}
